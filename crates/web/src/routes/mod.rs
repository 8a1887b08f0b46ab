//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the product listing
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Listing (search via ?q=, pagination via ?page=)
//! POST /products               - Create from the new-product form
//! GET  /products/new           - New-product form
//! POST /products/refresh       - Re-fetch the list from the remote store
//! GET  /products/{id}/edit     - Edit form, prefilled from the cache
//! POST /products/{id}/edit     - Save edited product (full replace)
//! POST /products/{id}/delete   - Delete product
//! ```

pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_form))
        .route("/refresh", post(products::refresh))
        .route("/{id}/edit", get(products::edit_form).post(products::update))
        .route("/{id}/delete", post(products::delete))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .nest("/products", product_routes())
}
