//! Notification Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,

    /// Recipient
    pub user: String,

    pub message: String,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub link: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            user: user.into(),
            message: message.into(),
            read: false,
            link: String::new(),
            created_at: Utc::now(),
        }
    }
}
