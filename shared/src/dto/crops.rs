use serde::{Deserialize, Serialize};

/// Crop list entry from the remote catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Full crop detail from the remote catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub seasons: Vec<String>,
    pub soil_types: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for admin crop create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropUpsert {
    pub name: String,
    pub category: String,
    pub seasons: Vec<String>,
    pub soil_types: Vec<String>,
    pub description: String,
}
