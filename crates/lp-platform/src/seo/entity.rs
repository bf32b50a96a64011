//! SEO Metadata Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub meta_title: String,

    #[serde(default)]
    pub meta_description: String,

    #[serde(default)]
    pub meta_keywords: Vec<String>,

    #[serde(default)]
    pub canonical_url: String,

    #[serde(default)]
    pub og_image: String,

    #[serde(default)]
    pub og_title: String,

    #[serde(default)]
    pub og_description: String,

    #[serde(default)]
    pub twitter_card: String,

    /// schema.org type for structured data
    #[serde(default = "default_schema_type")]
    pub schema_type: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

fn default_schema_type() -> String {
    "Product".to_string()
}

impl Default for Seo {
    fn default() -> Self {
        Self::new()
    }
}

impl Seo {
    pub fn new() -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            meta_title: String::new(),
            meta_description: String::new(),
            meta_keywords: vec![],
            canonical_url: String::new(),
            og_image: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            twitter_card: String::new(),
            schema_type: default_schema_type(),
            created_at: Utc::now(),
        }
    }
}
