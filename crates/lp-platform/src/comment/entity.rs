//! Comment Entity
//!
//! Public comments on a product page. Anonymous commenters supply a display
//! name; logged-in commenters are attributed by user reference. Replies are
//! embedded in the parent comment document.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub message: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub message: String,

    #[serde(default)]
    pub replies: Vec<Reply>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(product: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            user: None,
            name: None,
            message: message.into(),
            replies: vec![],
            created_at: Utc::now(),
        }
    }

    pub fn add_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }
}
