//! Roadmap Entity

use serde::{Deserialize, Serialize};

/// Delivery stage of a roadmap item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStage {
    Planned,
    InProgress,
    Completed,
}

impl Default for RoadmapStage {
    fn default() -> Self {
        Self::Planned
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub stage: RoadmapStage,
}

impl RoadmapItem {
    pub fn new(product: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            title: title.into(),
            description: String::new(),
            stage: RoadmapStage::Planned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RoadmapStage::InProgress).unwrap(),
            "\"in-progress\""
        );
    }
}
