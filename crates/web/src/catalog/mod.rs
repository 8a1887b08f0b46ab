//! In-memory mirror of the server-side product list.
//!
//! The catalog is mutated only in response to successful remote
//! operations - there is no optimistic write and no rollback. Ordering
//! follows the server's list order, with created products appended.

pub mod view;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::ProductId;

use crate::store::Product;

/// Shared, ordered cache of products.
///
/// Cheaply cloneable; all clones share the same underlying list. The lock
/// is only ever held for short synchronous sections, never across awaits.
#[derive(Clone, Default)]
pub struct Catalog {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the entire cache with a freshly fetched list.
    pub fn replace_all(&self, products: Vec<Product>) {
        *self.write() = products;
    }

    /// Add a newly created product.
    ///
    /// Appends to the end of the list. If the server ever re-issues an
    /// existing id the old entry is replaced in place instead, keeping
    /// ids unique within the cache.
    pub fn insert(&self, product: Product) {
        let mut products = self.write();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
    }

    /// Replace an entity wholesale, preserving its id and list position.
    ///
    /// Returns `false` if no entry with the given id exists.
    pub fn replace(&self, product: Product) -> bool {
        let mut products = self.write();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    /// Remove exactly one entity by id.
    ///
    /// Returns `false` if no entry with the given id exists.
    pub fn remove(&self, id: ProductId) -> bool {
        let mut products = self.write();
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// Consistent copy of the full list for view derivation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Number of cached products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
