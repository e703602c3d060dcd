//! Reservation Model
//!
//! A reservation starts `Pending` and is decided exactly once by a
//! restaurant operator; both `Accepted` and `Rejected` are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::floorplan::TimeWindow;

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ReservationStatus {
    /// Whether no further transition is allowed from this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Whether the `self -> next` transition is allowed.
    ///
    /// Only `Pending -> Accepted` and `Pending -> Rejected` are valid;
    /// there is no way back to `Pending`.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }

    /// Whether a reservation in this status blocks a time slot
    pub fn blocks_availability(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: String,
    pub table_id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
}

impl Reservation {
    /// The booked `[start, end)` window
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Create reservation payload (always submitted as `Pending`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub user_id: String,
    pub restaurant_id: String,
    pub table_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
}

impl ReservationCreate {
    pub fn new(
        user_id: impl Into<String>,
        restaurant_id: impl Into<String>,
        table_id: impl Into<String>,
        window: TimeWindow,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            restaurant_id: restaurant_id.into(),
            table_id: table_id.into(),
            start_time: window.start,
            end_time: window.end,
            status: ReservationStatus::Pending,
        }
    }
}

/// Status-update payload for the operator decision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDecision {
    pub reservation_id: String,
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_decided_once() {
        let pending = ReservationStatus::Pending;
        assert!(pending.can_transition_to(ReservationStatus::Accepted));
        assert!(pending.can_transition_to(ReservationStatus::Rejected));
        assert!(!pending.can_transition_to(ReservationStatus::Pending));
    }

    #[test]
    fn decided_statuses_are_terminal() {
        for status in [ReservationStatus::Accepted, ReservationStatus::Rejected] {
            assert!(status.is_terminal());
            assert!(!status.can_transition_to(ReservationStatus::Pending));
            assert!(!status.can_transition_to(ReservationStatus::Accepted));
            assert!(!status.can_transition_to(ReservationStatus::Rejected));
        }
    }

    #[test]
    fn only_accepted_blocks_availability() {
        assert!(ReservationStatus::Accepted.blocks_availability());
        assert!(!ReservationStatus::Pending.blocks_availability());
        assert!(!ReservationStatus::Rejected.blocks_availability());
    }

    #[test]
    fn status_uses_uppercase_wire_names() {
        let json = serde_json::to_string(&ReservationStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let parsed: ReservationStatus = serde_json::from_str("\"ACCEPTED\"").unwrap();
        assert_eq!(parsed, ReservationStatus::Accepted);
    }
}
