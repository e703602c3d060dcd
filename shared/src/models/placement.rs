//! Table Placement Model

use serde::{Deserialize, Serialize};

/// A table's position and seat capacity within a restaurant floor plan.
///
/// Coordinates are grid positions; anything outside `[0, grid_size)` is
/// ignored when the placement is projected onto the grid. `available` is
/// the operator-controlled base availability, independent of reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePlacement {
    pub table_id: String,
    pub position_x: i32,
    pub position_y: i32,
    pub capacity: u32,
    pub available: bool,
}

impl TablePlacement {
    pub fn new(table_id: impl Into<String>, x: i32, y: i32, capacity: u32) -> Self {
        Self {
            table_id: table_id.into(),
            position_x: x,
            position_y: y,
            capacity,
            available: true,
        }
    }
}

/// Raw persistence cell for the grid-layout fetch/save pair.
///
/// The backend stores a restaurant layout as a 2D array of these,
/// indexed `[row][col]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCell {
    pub is_table: bool,
    pub capacity: u32,
    pub is_available: bool,
}
