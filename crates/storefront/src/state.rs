//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogStore, load_catalog};
use crate::config::StorefrontConfig;
use crate::fakestore::FakeStoreClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the upstream API client
/// and the catalog store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    fakestore: FakeStoreClient,
    catalog: CatalogStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                fakestore: FakeStoreClient::new(&config.fakestore),
                catalog: CatalogStore::new(),
            }),
        }
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Kick off a catalog load attempt in the background.
    ///
    /// Called once at startup and again on every retry; the store re-enters
    /// `Loading` immediately and settles when both fetches resolve.
    pub fn start_catalog_load(&self) {
        let store = self.inner.catalog.clone();
        let client = self.inner.fakestore.clone();

        // Mark Loading synchronously so the state is visible before the
        // spawned task gets polled.
        store.set_loading();

        tokio::spawn(async move {
            load_catalog(&store, &client).await;
        });
    }
}
