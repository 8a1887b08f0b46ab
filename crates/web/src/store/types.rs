//! Wire types for the remote store API.

use serde::{Deserialize, Serialize};
use stockroom_core::{ProductId, Rating};

/// A product record as held by the remote store.
///
/// The id is server-assigned; everything else is caller-provided. Updates
/// are full-resource replaces, so there are no partial-field semantics
/// beyond what the caller puts in the struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Unsaved product data pending submission (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub rating: Rating,
}

/// Raw create/update response body.
///
/// The store echoes the submitted fields back with the assigned id, but is
/// loose about the rating: some responses omit it. Kept private to the
/// client, which reconciles the rating before handing out a [`Product`].
#[derive(Debug, Deserialize)]
pub(crate) struct ProductPayload {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub rating: Option<Rating>,
}

impl ProductPayload {
    /// Convert into a [`Product`], filling a missing rating from `fallback`.
    pub(crate) fn into_product(self, fallback: Rating) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            rating: self.rating.unwrap_or(fallback),
        }
    }
}
