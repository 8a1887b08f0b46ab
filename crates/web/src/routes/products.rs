//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use stockroom_core::ProductId;

use crate::catalog::view;
use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::{ProductForm, ValidationErrors};
use crate::state::AppState;
use crate::store::Product;

/// Descriptions longer than this are truncated behind a "Read more" link.
const DESCRIPTION_PREVIEW_CHARS: usize = 40;

/// Listing query parameters.
///
/// The search form submits only `q`, so a changed search term always
/// lands back on page 1.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    /// Product id whose full description is shown ("Read more").
    pub expand: Option<i64>,
}

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub price: String,
    pub rate: f64,
    pub count: u64,
    pub description: String,
    pub expanded: bool,
    pub can_expand: bool,
    /// Listing URL that toggles this product's "Read more" state.
    pub toggle_href: String,
}

/// Numbered pagination link.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Format a raw price as a display string.
fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Build a listing URL carrying search term, page, and expansion state.
fn listing_href(query: &str, page: usize, expand: Option<i64>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    if !query.is_empty() {
        serializer.append_pair("q", query);
    }
    if page > 1 {
        serializer.append_pair("page", &page.to_string());
    }
    if let Some(id) = expand {
        serializer.append_pair("expand", &id.to_string());
    }

    let qs = serializer.finish();
    if qs.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{qs}")
    }
}

impl ProductView {
    fn new(product: &Product, expanded: bool, toggle_href: String) -> Self {
        let can_expand = product.description.chars().count() > DESCRIPTION_PREVIEW_CHARS;
        let description = if expanded || !can_expand {
            product.description.clone()
        } else {
            let preview: String = product
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect();
            format!("{preview}...")
        };

        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            rate: product.rating.rate,
            count: product.rating.count,
            description,
            expanded,
            can_expand,
            toggle_href,
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub query: String,
    pub pages: Vec<PageLink>,
}

/// New-product form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct NewProductTemplate {
    pub form: ProductForm,
    pub errors: ValidationErrors,
}

/// Edit-product form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct EditProductTemplate {
    pub id: i64,
    pub form: ProductForm,
    pub errors: ValidationErrors,
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ProductsIndexTemplate {
    let term = query.q.clone().unwrap_or_default();
    let snapshot = state.catalog().snapshot();
    let filtered = view::filter(&snapshot, term.trim());
    let page = view::paginate(filtered, query.page.unwrap_or(1));

    let products = page
        .items
        .iter()
        .map(|p| {
            let expanded = query.expand == Some(p.id.as_i64());
            // "Read more" expands; "Read less" drops the parameter again
            let toggle = if expanded { None } else { Some(p.id.as_i64()) };
            ProductView::new(p, expanded, listing_href(term.trim(), page.number, toggle))
        })
        .collect();

    let pages = (1..=page.total_pages)
        .map(|n| PageLink {
            number: n,
            href: listing_href(term.trim(), n, None),
            current: n == page.number,
        })
        .collect();

    ProductsIndexTemplate {
        products,
        query: term,
        pages,
    }
}

/// Display the new-product form.
pub async fn new_form() -> NewProductTemplate {
    NewProductTemplate {
        form: ProductForm::default(),
        errors: ValidationErrors::default(),
    }
}

/// Create a product from the submitted form.
///
/// A form that fails validation is re-rendered with inline errors and
/// never reaches the remote store. A remote failure is logged and the
/// cache left unchanged.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ProductForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return NewProductTemplate { form, errors }.into_response();
        }
    };

    match state.store().create(&draft).await {
        Ok(product) => {
            tracing::info!(id = %product.id, "product created");
            state.catalog().insert(product);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create product");
        }
    }

    Redirect::to("/products").into_response()
}

/// Display the edit form, prefilled from the cache.
#[instrument(skip(state))]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<EditProductTemplate> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(EditProductTemplate {
        id: id.as_i64(),
        form: ProductForm::from_product(&product),
        errors: ValidationErrors::default(),
    })
}

/// Save an edited product.
///
/// The full entity is PUT to the store (wholesale replace, id
/// preserved); on acknowledgment the cache entry is replaced with the
/// locally edited record - last write wins, no conflict detection.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Form(form): axum::Form<ProductForm>,
) -> Result<Response> {
    let id = ProductId::new(id);
    if state.catalog().get(id).is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(EditProductTemplate {
                id: id.as_i64(),
                form,
                errors,
            }
            .into_response());
        }
    };

    let product = Product {
        id,
        title: draft.title,
        price: draft.price,
        description: draft.description,
        category: draft.category,
        rating: draft.rating,
    };

    match state.store().update(id, &product).await {
        Ok(_) => {
            tracing::info!(id = %id, "product updated");
            state.catalog().replace(product);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to update product");
        }
    }

    Ok(Redirect::to("/products").into_response())
}

/// Delete a product.
///
/// The cache entry is removed only after the store acknowledges the
/// delete; a remote failure is logged and the entry kept.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let id = ProductId::new(id);

    match state.store().remove(id).await {
        Ok(()) => {
            tracing::info!(id = %id, "product deleted");
            if !state.catalog().remove(id) {
                tracing::warn!(id = %id, "deleted product was not in the cache");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to delete product");
        }
    }

    Redirect::to("/products")
}

/// Re-fetch the full product list from the remote store.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Result<Redirect> {
    let products = state.store().fetch_all().await?;
    tracing::info!(count = products.len(), "product cache refreshed");
    state.catalog().replace_all(products);

    Ok(Redirect::to("/products"))
}

#[cfg(test)]
mod tests {
    use stockroom_core::Rating;

    use super::*;

    fn product_with_description(description: &str) -> Product {
        Product {
            id: ProductId::new(1),
            title: "Lamp".to_string(),
            price: 12.5,
            description: description.to_string(),
            category: "home".to_string(),
            rating: Rating::new(4.0, 10),
        }
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(109.0), "$109.00");
    }

    #[test]
    fn test_short_description_is_not_truncated() {
        let view = ProductView::new(
            &product_with_description("Short text"),
            false,
            String::new(),
        );
        assert_eq!(view.description, "Short text");
        assert!(!view.can_expand);
    }

    #[test]
    fn test_long_description_is_truncated_until_expanded() {
        let long = "x".repeat(60);
        let product = product_with_description(&long);

        let collapsed = ProductView::new(&product, false, String::new());
        assert!(collapsed.can_expand);
        assert_eq!(collapsed.description, format!("{}...", "x".repeat(40)));

        let expanded = ProductView::new(&product, true, String::new());
        assert_eq!(expanded.description, long);
    }

    #[test]
    fn test_listing_href_omits_defaults() {
        assert_eq!(listing_href("", 1, None), "/products");
        assert_eq!(listing_href("lamp", 1, None), "/products?q=lamp");
        assert_eq!(listing_href("desk lamp", 2, None), "/products?q=desk+lamp&page=2");
        assert_eq!(listing_href("", 3, Some(7)), "/products?page=3&expand=7");
    }
}
