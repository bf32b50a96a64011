//! Review Entity
//!
//! One review per (product, user); re-submitting replaces the old rating.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    pub user: String,

    /// 1 to 5 stars
    pub rating: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(product: impl Into<String>, user: impl Into<String>, rating: i32) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            user: user.into(),
            rating,
            title: None,
            review: None,
            created_at: Utc::now(),
        }
    }
}

/// Average rating over the full review set; 0 when there are none.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: i64 = reviews.iter().map(|r| r.rating as i64).sum();
    total as f64 / reviews.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_ratings() {
        let reviews = vec![Review::new("p", "a", 3), Review::new("p", "b", 5)];
        assert_eq!(average_rating(&reviews), 4.0);
    }

    #[test]
    fn test_average_after_removal() {
        let reviews = vec![Review::new("p", "a", 3)];
        assert_eq!(average_rating(&reviews), 3.0);
    }

    #[test]
    fn test_average_of_empty_set_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }
}
