//! Catalog load-state machine.
//!
//! The app starts in `Loading`. A background task fetches products and
//! categories concurrently and settles the store into `Loaded` or `Error`;
//! a retry re-enters `Loading` and runs the whole load again. There is no
//! partial state: either both collections are present or neither is shown.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::instrument;

use crate::fakestore::{Category, FakeStoreClient, FakeStoreError, Product};

/// The loaded catalog: both collections, or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Full product collection, in API order.
    pub products: Vec<Product>,
    /// Known category labels, in API order.
    pub categories: Vec<Category>,
}

/// Load state of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// A load attempt is in flight.
    Loading,
    /// Both fetches succeeded.
    Loaded(Catalog),
    /// A fetch failed; holds the cause for the error panel.
    Error(String),
}

/// Shared, interior-mutable holder for the catalog state.
///
/// Handlers read a snapshot; only the load task writes. Lock poisoning is
/// recovered by taking the inner value, since the state is replaced
/// wholesale on every write.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogState>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create a new store in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogState::Loading)),
        }
    }

    /// Clone out the current state.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True once a load attempt has succeeded and not been restarted.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.snapshot(), CatalogState::Loaded(_))
    }

    /// Re-enter the `Loading` state for a fresh load attempt.
    pub fn set_loading(&self) {
        self.replace(CatalogState::Loading);
    }

    /// Settle into `Loaded` with both collections.
    pub fn set_loaded(&self, catalog: Catalog) {
        self.replace(CatalogState::Loaded(catalog));
    }

    /// Settle into `Error` with a descriptive cause.
    pub fn set_error(&self, message: String) {
        self.replace(CatalogState::Error(message));
    }

    fn replace(&self, state: CatalogState) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Run one full catalog load attempt against the API.
///
/// Issues both fetches concurrently and fails fast: the first failure aborts
/// the attempt and lands in `Error` with its cause. The single `Result`
/// absorption here is the only place upstream errors are caught.
#[instrument(skip_all)]
pub async fn load_catalog(store: &CatalogStore, client: &FakeStoreClient) {
    store.set_loading();

    match tokio::try_join!(client.get_products(), client.get_categories()) {
        Ok((products, categories)) => {
            tracing::info!(
                products = products.len(),
                categories = categories.len(),
                "Catalog loaded"
            );
            store.set_loaded(Catalog {
                products,
                categories,
            });
        }
        Err(error) => {
            tracing::error!(%error, "Catalog load failed");
            store.set_error(load_error_message(&error));
        }
    }
}

/// User-facing cause line for the error panel.
fn load_error_message(error: &FakeStoreError) -> String {
    match error {
        FakeStoreError::Http(_) => "Could not reach the catalog service".to_string(),
        FakeStoreError::Status { status, .. } => {
            format!("The catalog service answered with {status}")
        }
        FakeStoreError::Parse(_) | FakeStoreError::InvalidData(_) => {
            "The catalog service returned unusable data".to_string()
        }
    }
}
