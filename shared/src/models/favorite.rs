//! Favorite Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// User-restaurant bookmark, independent of reservations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub restaurant_id: String,
    pub created_at: Timestamp,
}
