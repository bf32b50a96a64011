//! Product Entity
//!
//! The published listing. Counters (views, clicks, votes, trending score)
//! and the review average are server-owned; they are never writable through
//! the update API.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Publication state. `Pending` is only reachable through the direct
/// create path for non-admin users; the submission workflow publishes
/// immediately on approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Published,
    Pending,
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::Published
    }
}

/// Launch lifecycle stage shown on the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    Beta,
    Live,
    ComingSoon,
}

impl Default for LaunchStatus {
    fn default() -> Self {
        Self::Live
    }
}

/// Social profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Team member shown on the product page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    /// Unique URL-safe identifier derived from the title
    pub slug: String,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub gallery: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_demo: Option<String>,

    /// Category reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Tag references
    #[serde(default)]
    pub tags: Vec<String>,

    /// Pricing plan references
    #[serde(default)]
    pub plans: Vec<String>,

    /// SEO metadata reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<String>,

    /// Recomputed over the full review set on every review mutation
    #[serde(default)]
    pub avg_rating: f64,

    #[serde(default)]
    pub views: i64,

    #[serde(default)]
    pub clicks: i64,

    /// Full recount on every vote mutation
    #[serde(default)]
    pub votes: i64,

    #[serde(default)]
    pub featured: bool,

    /// Nudged by view (+2) and click (+3) events
    #[serde(default = "default_trending_score")]
    pub trending_score: i64,

    /// Location reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_extension: Option<String>,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime_optional"
    )]
    pub launch_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub launch_status: LaunchStatus,

    /// Creator reference; None for products materialized from
    /// admin-originated submissions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default)]
    pub team: Vec<TeamMember>,

    #[serde(default)]
    pub status: ProductStatus,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

fn default_trending_score() -> i64 {
    1
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::TsidGenerator::generate(),
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
            long_description: None,
            thumbnail: None,
            gallery: vec![],
            video_demo: None,
            category: None,
            tags: vec![],
            plans: vec![],
            seo: None,
            avg_rating: 0.0,
            views: 0,
            clicks: 0,
            votes: 0,
            featured: false,
            trending_score: 1,
            location: None,
            website_url: None,
            app_store_link: None,
            play_store_link: None,
            chrome_extension: None,
            social: SocialLinks::default(),
            launch_date: None,
            launch_status: LaunchStatus::Live,
            created_by: None,
            team: vec![],
            status: ProductStatus::Published,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.created_by.as_deref() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new("My App", "my-app", "A tool");
        assert_eq!(product.status, ProductStatus::Published);
        assert_eq!(product.launch_status, LaunchStatus::Live);
        assert_eq!(product.trending_score, 1);
        assert_eq!(product.votes, 0);
        assert_eq!(product.avg_rating, 0.0);
    }

    #[test]
    fn test_ownership() {
        let mut product = Product::new("My App", "my-app", "A tool");
        assert!(!product.is_owned_by("u1"));
        product.created_by = Some("u1".to_string());
        assert!(product.is_owned_by("u1"));
        assert!(!product.is_owned_by("u2"));
    }

    #[test]
    fn test_launch_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LaunchStatus::ComingSoon).unwrap(),
            "\"coming_soon\""
        );
    }
}
