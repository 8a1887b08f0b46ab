//! Remote store API client.
//!
//! Thin REST client over the product-collection endpoint: GET (list),
//! POST (create), PUT `/:id` (replace), DELETE `/:id`. Calls are
//! single-attempt with no retry or backoff; callers log failures and
//! carry on with the cache unchanged.

mod types;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use stockroom_core::ProductId;

pub use types::{Product, ProductDraft};

use types::ProductPayload;

/// Errors produced by the remote store client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (connect, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body could not be parsed.
    #[error("failed to parse store response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the remote store API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    client: reqwest::Client,
    collection_url: Url,
}

impl StoreClient {
    /// Create a new store client for the given product-collection URL.
    #[must_use]
    pub fn new(collection_url: Url) -> Self {
        Self {
            inner: Arc::new(StoreClientInner {
                client: reqwest::Client::new(),
                collection_url,
            }),
        }
    }

    /// URL of a single product resource.
    fn item_url(&self, id: ProductId) -> String {
        format!(
            "{}/{id}",
            self.inner.collection_url.as_str().trim_end_matches('/')
        )
    }

    /// Check the status and parse the JSON body of a response.
    ///
    /// Reads the body as text first so parse failures can be logged with
    /// a truncated copy of what the store actually sent.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "store API returned non-success status"
            );
            return Err(StoreError::Status {
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
                    "failed to parse store response"
                );
                Err(StoreError::Parse(e))
            }
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a
    /// product list.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let response = self
            .inner
            .client
            .get(self.inner.collection_url.as_str())
            .send()
            .await?;

        let products: Vec<Product> = Self::read_json(response).await?;
        debug!(count = products.len(), "fetched product list");
        Ok(products)
    }

    /// Create a product from a draft.
    ///
    /// The store assigns the id and echoes the record back. Some store
    /// responses omit the rating; it is reconciled from the draft so the
    /// caller always gets a complete entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let response = self
            .inner
            .client
            .post(self.inner.collection_url.as_str())
            .json(draft)
            .send()
            .await?;

        let payload: ProductPayload = Self::read_json(response).await?;
        let product = payload.into_product(draft.rating);
        debug!(id = %product.id, "created product");
        Ok(product)
    }

    /// Replace a product wholesale.
    ///
    /// Full-resource PUT; the store applies whatever the caller provides
    /// with no partial-field merging. Returns the store's echo of the
    /// replaced record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, product), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, product: &Product) -> Result<Product, StoreError> {
        let response = self
            .inner
            .client
            .put(self.item_url(id))
            .json(product)
            .send()
            .await?;

        let payload: ProductPayload = Self::read_json(response).await?;
        let product = payload.into_product(product.rating);
        debug!(id = %product.id, "updated product");
        Ok(product)
    }

    /// Delete a product by id.
    ///
    /// The response body (the store echoes the deleted record) is
    /// discarded; only the acknowledgment matters to callers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn remove(&self, id: ProductId) -> Result<(), StoreError> {
        let response = self.inner.client.delete(self.item_url(id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "store API returned non-success status"
            );
            return Err(StoreError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        debug!(id = %id, "deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> StoreClient {
        StoreClient::new(Url::parse(url).expect("valid test URL"))
    }

    #[test]
    fn test_item_url_joins_id() {
        let client = client_for("https://fakestoreapi.com/products");
        assert_eq!(
            client.item_url(ProductId::new(7)),
            "https://fakestoreapi.com/products/7"
        );
    }

    #[test]
    fn test_item_url_tolerates_trailing_slash() {
        let client = client_for("https://fakestoreapi.com/products/");
        assert_eq!(
            client.item_url(ProductId::new(7)),
            "https://fakestoreapi.com/products/7"
        );
    }
}
