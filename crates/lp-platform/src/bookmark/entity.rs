//! Bookmark Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved product; one per (user, product) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(rename = "_id")]
    pub id: String,

    pub user: String,

    pub product: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            user: user.into(),
            product: product.into(),
            created_at: Utc::now(),
        }
    }
}
