//! Restaurant Model

use serde::{Deserialize, Serialize};

use super::placement::TablePlacement;

/// Public restaurant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub layout: Vec<TablePlacement>,
    pub average_rating: Option<f64>,
}
