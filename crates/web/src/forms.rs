//! Transient form state for the create and edit flows.
//!
//! Fields arrive as raw strings from the browser and stay strings until
//! validation; a form that fails validation never reaches the remote API.

use std::collections::BTreeMap;

use serde::Deserialize;
use stockroom_core::Rating;

use crate::store::ProductDraft;

/// Input buffers for the product form.
///
/// Also used to re-render a rejected form with the entered values intact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub count: String,
}

/// Field-keyed validation errors, surfaced inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// Message for a field, if it failed validation.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    /// Whether any field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ProductForm {
    /// Build a form prefilled from an existing product, for the edit page.
    #[must_use]
    pub fn from_product(product: &crate::store::Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            rate: product.rating.rate.to_string(),
            count: product.rating.count.to_string(),
        }
    }

    /// Validate synchronously and convert into a draft.
    ///
    /// Title, description, and category are required; price must be
    /// present and numeric. The rating inputs are optional numerics that
    /// fall back to zero - no stricter schema checks exist.
    ///
    /// # Errors
    ///
    /// Returns the field-keyed errors when any check fails.
    pub fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        // f64::from_str accepts "NaN" and "inf"; neither is a valid price
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite());
        if price.is_none() {
            errors.add("price", "Valid price is required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            price: price.unwrap_or_default(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            rating: Rating::new(
                self.rate.trim().parse().unwrap_or_default(),
                self.count.trim().parse().unwrap_or_default(),
            ),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            title: "Desk Lamp".to_string(),
            price: "12.50".to_string(),
            description: "Small lamp".to_string(),
            category: "home".to_string(),
            rate: "4.5".to_string(),
            count: "120".to_string(),
        }
    }

    #[test]
    fn test_valid_form_becomes_draft() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.title, "Desk Lamp");
        assert!((draft.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(draft.rating, Rating::new(4.5, 120));
    }

    #[test]
    fn test_empty_title_fails() {
        let mut form = filled_form();
        form.title = "   ".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.get("price").is_none());
    }

    #[test]
    fn test_missing_price_fails() {
        let mut form = filled_form();
        form.price = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some("Valid price is required"));
    }

    #[test]
    fn test_non_numeric_price_fails() {
        let mut form = filled_form();
        form.price = "twelve".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some("Valid price is required"));
    }

    #[test]
    fn test_non_finite_price_fails() {
        for bad in ["NaN", "inf", "-inf", "infinity"] {
            let mut form = filled_form();
            form.price = bad.to_string();

            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("price"), Some("Valid price is required"));
        }
    }

    #[test]
    fn test_all_fields_missing_reports_every_error() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("price"), Some("Valid price is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
    }

    #[test]
    fn test_rating_inputs_are_optional_and_loose() {
        let mut form = filled_form();
        form.rate = String::new();
        form.count = "many".to_string();

        let draft = form.validate().unwrap();
        assert_eq!(draft.rating, Rating::default());
    }

    #[test]
    fn test_prefill_round_trips_product_fields() {
        use stockroom_core::ProductId;

        let product = crate::store::Product {
            id: ProductId::new(3),
            title: "Mug".to_string(),
            price: 7.5,
            description: "A mug".to_string(),
            category: "kitchen".to_string(),
            rating: Rating::new(3.0, 12),
        };

        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "7.5");
        assert_eq!(form.count, "12");
        assert!(form.validate().is_ok());
    }
}
