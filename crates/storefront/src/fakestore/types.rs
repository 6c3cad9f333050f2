//! Domain types for the Fake Store catalog.
//!
//! These types provide a clean, ergonomic API separate from the raw wire
//! shapes in `wire`. Products are immutable once fetched; the loaded catalog
//! owns them for the lifetime of a load generation.

use serde::{Deserialize, Serialize};
use verdant_core::{Price, ProductId, Rating};

/// A category label, verbatim as the API returns it (case-sensitive).
pub type Category = String;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream product id.
    pub id: ProductId,
    /// Display title; the text searched by the filter engine.
    pub title: String,
    /// Category label, one of the open set returned by the categories fetch.
    pub category: Category,
    /// Unit price (non-negative).
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Long-form description shown on the detail view.
    pub description: String,
    /// Average review rating and count.
    pub rating: Rating,
}
