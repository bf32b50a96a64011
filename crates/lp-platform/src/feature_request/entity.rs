//! Feature Request Entity

use serde::{Deserialize, Serialize};

/// Delivery status, admin-controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureStatus {
    Planned,
    InProgress,
    Done,
}

impl Default for FeatureStatus {
    fn default() -> Self {
        Self::Planned
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    pub title: String,

    pub description: String,

    /// Simple upvote counter
    #[serde(default)]
    pub votes: i64,

    #[serde(default)]
    pub status: FeatureStatus,
}

impl FeatureRequest {
    pub fn new(
        product: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            title: title.into(),
            description: description.into(),
            votes: 0,
            status: FeatureStatus::Planned,
        }
    }
}
