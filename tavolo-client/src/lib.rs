//! Tavolo Client - HTTP client for the reservation backend
//!
//! Provides network-based HTTP calls to the reservation REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{LoginResponse, Reservation, Restaurant, UserInfo};
