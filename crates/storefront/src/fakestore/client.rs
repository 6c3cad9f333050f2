//! HTTP client for the Fake Store API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::FakeStoreConfig;

use super::conversions::convert_products;
use super::types::{Category, Product};
use super::{FakeStoreError, wire};

/// Client for the Fake Store API.
///
/// Provides typed access to the product and category listings. Each call
/// issues exactly one network read; there are no retries and no caching, and
/// the platform-default timeout applies.
#[derive(Clone)]
pub struct FakeStoreClient {
    inner: Arc<FakeStoreClientInner>,
}

struct FakeStoreClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl FakeStoreClient {
    /// Create a new Fake Store API client.
    #[must_use]
    pub fn new(config: &FakeStoreConfig) -> Self {
        Self {
            inner: Arc::new(FakeStoreClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Execute a GET request and parse the JSON response body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FakeStoreError> {
        let url = format!("{}{path}", self.inner.base_url);
        debug!(%url, "Fetching from Fake Store API");

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Fake Store API returned non-success status"
            );
            return Err(FakeStoreError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse Fake Store API response"
                );
                Err(FakeStoreError::Parse(e))
            }
        }
    }

    /// Fetch the full product listing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that fails to parse or convert.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, FakeStoreError> {
        let raw: Vec<wire::ApiProduct> = self.get_json("/products").await?;
        convert_products(raw)
    }

    /// Fetch the category label listing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that fails to parse.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, FakeStoreError> {
        self.get_json("/products/categories").await
    }
}
