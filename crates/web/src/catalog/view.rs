//! Pure view derivation over a catalog snapshot.
//!
//! Filtering and pagination are computed fresh from the cache on every
//! request; nothing here does I/O or holds state.

use crate::store::Product;

/// Fixed number of products per page.
pub const PAGE_SIZE: usize = 4;

/// One page of filtered products, ready for display.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    /// Products on this page, at most [`PAGE_SIZE`].
    pub items: Vec<Product>,
    /// 1-based page number this page was derived for.
    pub number: usize,
    /// Total number of pages for the filtered set.
    pub total_pages: usize,
}

/// Case-insensitive substring match against title, stringified price, or
/// category. An empty term matches everything.
#[must_use]
pub fn matches(product: &Product, term: &str) -> bool {
    matches_lowercase(product, &term.to_lowercase())
}

/// `term` must already be lowercased.
fn matches_lowercase(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term)
        || product.price.to_string().contains(term)
        || product.category.to_lowercase().contains(term)
}

/// Filter a snapshot by search term, preserving order.
#[must_use]
pub fn filter(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| matches_lowercase(p, &term))
        .cloned()
        .collect()
}

/// Number of pages needed for `filtered_len` products.
///
/// An empty set still has zero pages; the listing renders no pagination
/// links in that case.
#[must_use]
pub const fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Take the given 1-based page out of an already filtered list.
///
/// A page past the end yields an empty page rather than clamping.
#[must_use]
pub fn paginate(filtered: Vec<Product>, page: usize) -> ProductPage {
    let page = page.max(1);
    let total_pages = page_count(filtered.len());

    // page is request input; saturate instead of overflowing on huge values
    let items = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .collect();

    ProductPage {
        items,
        number: page,
        total_pages,
    }
}
