//! Typed endpoint wrappers
//!
//! One module per backend surface. Every function is generic over
//! [`HttpClient`](crate::HttpClient) so the app layer can run against a
//! canned transport in tests.

pub mod auth;
pub mod favorites;
pub mod layout;
pub mod menu;
pub mod reservations;
pub mod restaurants;
