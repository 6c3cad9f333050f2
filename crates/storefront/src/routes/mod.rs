//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog page (accepts ?q= and ?category=)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Catalog (HTMX fragments)
//! GET  /catalog/grid           - Filtered product grid fragment
//! POST /catalog/retry          - Re-attempt the catalog load
//!
//! # Products
//! GET  /products/{id}           - Product detail page
//! GET  /products/{id}/quick-view - Quick view modal fragment (HTMX)
//! ```

pub mod catalog;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/grid", get(catalog::grid))
        .route("/retry", post(catalog::retry))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/quick-view", get(products::quick_view))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog page
        .route("/", get(catalog::index))
        // Catalog fragments
        .nest("/catalog", catalog_routes())
        // Product routes
        .nest("/products", product_routes())
}
