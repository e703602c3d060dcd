//! Data models
//!
//! Shared between the HTTP client and the app layer (via API).
//! Wire names are camelCase to match the backend.

pub mod favorite;
pub mod menu;
pub mod placement;
pub mod reservation;
pub mod restaurant;
pub mod user;

// Re-exports
pub use favorite::*;
pub use menu::*;
pub use placement::*;
pub use reservation::*;
pub use restaurant::*;
pub use user::*;
