//! Badge Entity

use serde::{Deserialize, Serialize};

/// Listing badge, e.g. "Trending", "New", "Verified"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#000000".to_string()
}

impl Badge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            name: name.into(),
            icon: String::new(),
            color: default_color(),
        }
    }
}
