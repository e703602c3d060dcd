//! Tavolo App - headless application layer
//!
//! Holds everything between the HTTP client and a rendering frontend:
//! the session store, the bridge exposing page operations, the operator
//! dashboard view-state machine, pre-submission form checks, and the
//! pending-reservation poller.

pub mod bridge;
pub mod error;
pub mod forms;
pub mod logger;
pub mod notify;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{AppBridge, FloorPage};
pub use error::{AppError, AppResult};
pub use notify::ReservationPoller;
pub use session::{SessionStore, UserSession};
pub use view::{DashboardSection, SectionKind};

// Re-export the layers below for downstream consumers
pub use shared;
pub use tavolo_client;
