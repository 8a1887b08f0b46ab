//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StockroomConfig;
use crate::store::StoreClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the remote store client, and the
/// product cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StockroomConfig,
    store: StoreClient,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StockroomConfig) -> Self {
        let store = StoreClient::new(config.store_api_url.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: Catalog::new(),
            }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &StockroomConfig {
        &self.inner.config
    }

    /// Get a reference to the remote store client.
    #[must_use]
    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }

    /// Get a reference to the product cache.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Load the cache from the remote store.
    ///
    /// One attempt, no retry: on failure the error is logged and the app
    /// continues with whatever the cache already holds (empty at boot).
    pub async fn hydrate(&self) {
        match self.inner.store.fetch_all().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "product cache hydrated");
                self.inner.catalog.replace_all(products);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch products");
            }
        }
    }
}
