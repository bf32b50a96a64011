//! Submission Entity
//!
//! A draft product proposal moving through moderation. Status transitions
//! are one-way: pending -> approved or pending -> rejected.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Moderation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Submission entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,

    /// Product created from this submission, set on approval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Submitting user; None means admin-originated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Category suggested by the submitter (not an official reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,

    #[serde(default)]
    pub suggested_tags: Vec<String>,

    #[serde(default)]
    pub status: SubmissionStatus,

    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime_optional"
    )]
    pub launch_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub featured: bool,

    /// Internal moderation notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,

    #[serde(default)]
    pub views: i64,

    #[serde(default)]
    pub upvotes: i64,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::TsidGenerator::generate(),
            product: None,
            submitter: None,
            name: name.into(),
            tagline: None,
            email: None,
            website: None,
            logo: None,
            images: vec![],
            suggested_category: None,
            suggested_tags: vec![],
            status: SubmissionStatus::Pending,
            launch_date: None,
            featured: false,
            admin_notes: None,
            views: 0,
            upvotes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_submission_defaults() {
        let submission = Submission::new("My App");
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert!(submission.product.is_none());
        assert!(submission.submitter.is_none());
        assert!(!submission.is_approved());
    }
}
