//! Vote Entity
//!
//! One upvote per product per identity. Authenticated votes carry the user
//! id; anonymous votes carry the caller's IP. Exactly one of the two is set.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ip: Option<String>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn by_user(product: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            user: Some(user.into()),
            user_ip: None,
            created_at: Utc::now(),
        }
    }

    pub fn by_ip(product: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            user: None,
            user_ip: Some(ip.into()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_exclusivity() {
        let by_user = Vote::by_user("p1", "u1");
        assert!(by_user.user.is_some() && by_user.user_ip.is_none());

        let by_ip = Vote::by_ip("p1", "10.0.0.1");
        assert!(by_ip.user.is_none() && by_ip.user_ip.is_some());
    }
}
