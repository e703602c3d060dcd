//! App-layer error type

use shared::models::ReservationStatus;
use shared::validation::ValidationError;
use tavolo_client::ClientError;
use thiserror::Error;

use crate::session::SessionError;

/// Error type for bridge operations
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or backend failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Session persistence failure
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Local pre-submission validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation requires a logged-in user
    #[error("not logged in")]
    NotAuthenticated,

    /// Reservation decision on a non-pending reservation
    #[error("reservation is already {current}, cannot mark it {requested}")]
    InvalidTransition {
        current: ReservationStatus,
        requested: ReservationStatus,
    },
}

/// Result type for bridge operations
pub type AppResult<T> = Result<T, AppError>;
