//! User Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Privilege level carried in the role claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    /// Unique login identifier
    pub email: String,

    /// Argon2id PHC string; never serialized into API responses
    pub password_hash: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub bio: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Profile view counter
    #[serde(default)]
    pub views: i64,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(default)]
    pub role: Role,

    /// Reference to a purchased pricing plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_plan: Option<String>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::TsidGenerator::generate(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            avatar: String::new(),
            bio: String::new(),
            location: None,
            country: None,
            views: 0,
            is_verified: false,
            role: Role::User,
            purchased_plan: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("alice", "alice@example.com", "$argon2id$x");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert!(!user.is_verified);
        assert_eq!(user.views, 0);
    }

    #[test]
    fn test_with_role() {
        let user = User::new("root", "root@example.com", "$argon2id$x").with_role(Role::Admin);
        assert!(user.is_admin());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
