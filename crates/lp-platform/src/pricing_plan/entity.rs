//! Pricing Plan Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Once,
    Monthly,
    Yearly,
}

impl Default for BillingInterval {
    fn default() -> Self {
        Self::Once
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    #[serde(rename = "_id")]
    pub id: String,

    /// Owning product
    pub product: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub interval: BillingInterval,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub trial_days: i64,

    /// schema.org availability URL, used for SEO structured data
    #[serde(default = "default_availability")]
    pub availability: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub url: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_availability() -> String {
    "https://schema.org/InStock".to_string()
}

fn default_active() -> bool {
    true
}

impl PricingPlan {
    pub fn new(product: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            name: name.into(),
            description: String::new(),
            price: 0.0,
            currency: default_currency(),
            interval: BillingInterval::Once,
            features: vec![],
            trial_days: 0,
            availability: default_availability(),
            sku: String::new(),
            url: String::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
