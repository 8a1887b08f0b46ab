//! Customer rating value type.

use serde::{Deserialize, Serialize};

/// Aggregate customer rating for a product.
///
/// The store API reports ratings as a plain JSON object; some write
/// responses omit it entirely, in which case callers fall back to
/// [`Rating::default`] or to the rating carried by the submitted draft.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating (0.0 - 5.0 on the upstream API, not enforced here).
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings the average is based on.
    #[serde(default)]
    pub count: u64,
}

impl Rating {
    /// Create a new rating.
    #[must_use]
    pub const fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let rating = Rating::default();
        assert!((rating.rate - 0.0).abs() < f64::EPSILON);
        assert_eq!(rating.count, 0);
    }

    #[test]
    fn test_deserialize_partial_object() {
        // The upstream API is loosely typed; missing fields default to zero.
        let rating: Rating = serde_json::from_str(r#"{"rate": 3.9}"#).unwrap();
        assert!((rating.rate - 3.9).abs() < f64::EPSILON);
        assert_eq!(rating.count, 0);
    }
}
