//! Location Entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id")]
    pub id: String,

    pub country: String,

    #[serde(default)]
    pub state: String,

    pub city: String,

    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            country: country.into(),
            state: String::new(),
            city: city.into(),
            coordinates: Coordinates::default(),
        }
    }
}
