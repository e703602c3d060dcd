//! Reservation availability filter
//!
//! Given the reservation history for a restaurant and a candidate
//! `[start, end)` window, computes the set of tables already booked.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Reservation;
use crate::validation::ValidationError;

/// A half-open `[start, end)` time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting `start >= end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::new(
                "reservation start must be before its end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Standard half-open interval overlap: touching boundaries do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        other.start < self.end && self.start < other.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Table ids that are unavailable for the candidate window.
///
/// Only `Accepted` reservations block a slot; pending and rejected ones
/// never do.
pub fn reserved_table_ids(reservations: &[Reservation], window: TimeWindow) -> HashSet<String> {
    reservations
        .iter()
        .filter(|res| res.status.blocks_availability())
        .filter(|res| window.overlaps(&res.window()))
        .map(|res| res.table_id.clone())
        .collect()
}
