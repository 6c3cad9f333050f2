//! Fake Store API client.
//!
//! # Architecture
//!
//! - Plain REST over JSON via `reqwest` - two read-only endpoints, no auth
//! - The API is the source of truth - no local sync, no response caching;
//!   every catalog load fetches fresh
//! - Raw wire shapes live in [`wire`] and are converted into the domain
//!   types in [`types`] at the client boundary
//!
//! # Endpoints
//!
//! - `GET /products` - full product listing
//! - `GET /products/categories` - category label listing
//!
//! # Example
//!
//! ```rust,ignore
//! use verdant_storefront::fakestore::FakeStoreClient;
//!
//! let client = FakeStoreClient::new(&config.fakestore);
//! let (products, categories) =
//!     tokio::try_join!(client.get_products(), client.get_categories())?;
//! ```

mod client;
mod conversions;
mod wire;

pub mod types;

pub use client::FakeStoreClient;
pub use types::{Category, Product};

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Fake Store API.
#[derive(Debug, Error)]
pub enum FakeStoreError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Fake Store API returned {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Truncated response body, for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but violated a catalog invariant.
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}
