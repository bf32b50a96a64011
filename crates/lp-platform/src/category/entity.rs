//! Category Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Unique URL-safe identifier derived from the name
    pub slug: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            name: name.into(),
            slug: slug.into(),
            icon: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }
}
