//! Raw JSON shapes returned by the Fake Store API.
//!
//! These mirror the upstream payloads exactly and never leave this module;
//! `conversions` turns them into the domain types.

use serde::Deserialize;

/// A product object as returned by `GET /products`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiProduct {
    pub id: i64,
    pub title: String,
    /// Upstream sends prices as JSON floats, e.g. `109.95`.
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: ApiRating,
}

/// Rating sub-object of a product.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiRating {
    pub rate: f64,
    pub count: u64,
}
