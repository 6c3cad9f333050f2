//! Catalog state and filtering.
//!
//! The catalog is fetched once per load attempt (see [`store`]) and then
//! filtered per request by the pure functions in [`filter`]. The visible
//! product set is always recomputed in full from the loaded collection;
//! nothing is patched incrementally.

pub mod filter;
pub mod store;

pub use filter::{CategorySelection, FilterCriteria, filter};
pub use store::{Catalog, CatalogState, CatalogStore, load_catalog};
