//! Follow Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A follower/following edge between two users; one per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    #[serde(rename = "_id")]
    pub id: String,

    pub follower: String,

    pub following: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower: impl Into<String>, following: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            follower: follower.into(),
            following: following.into(),
            created_at: Utc::now(),
        }
    }
}
