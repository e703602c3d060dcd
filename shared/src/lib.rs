//! Shared types for the Tavolo platform
//!
//! Common types used across the client and app crates: domain models,
//! error codes, response envelopes, validation helpers, and the
//! floor-plan core (grid building and reservation availability).

pub mod error;
pub mod floorplan;
pub mod models;
pub mod response;
pub mod types;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Floor-plan core re-exports (for convenient access)
pub use floorplan::{FloorGrid, GridCell, TimeWindow, reserved_table_ids};
