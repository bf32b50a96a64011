//! Launch Day Entity
//!
//! A product's scheduled slot on the launch calendar.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDay {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub scheduled_date: DateTime<Utc>,

    #[serde(default)]
    pub rank: i64,

    #[serde(default)]
    pub votes: i64,
}

impl LaunchDay {
    pub fn new(product: impl Into<String>, scheduled_date: DateTime<Utc>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            scheduled_date,
            rank: 0,
            votes: 0,
        }
    }
}
