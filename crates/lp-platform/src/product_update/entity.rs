//! Product Update Entity
//!
//! Changelog entries posted against a product.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ProductUpdate {
    pub fn new(product: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            title: title.into(),
            description: String::new(),
            version: default_version(),
            created_at: Utc::now(),
        }
    }
}
