//! Common types for the shared crate

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::floorplan::TimeWindow;

/// Timestamp type (Unix seconds)
pub type Timestamp = i64;

/// A predefined reservation window used for filtering and display,
/// e.g. "6:30 PM – 8:00 PM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub label: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeBlock {
    pub fn new(label: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Concrete `[start, end)` window for this block on the given date.
    ///
    /// Blocks whose end time is at or before their start time span
    /// midnight, so the end lands on the following day.
    pub fn window_on(&self, date: NaiveDate) -> TimeWindow {
        let start = date.and_time(self.start).and_utc();
        let mut end = date.and_time(self.end).and_utc();
        if self.end <= self.start {
            end += Duration::days(1);
        }
        TimeWindow { start, end }
    }
}

/// The booking slots offered by the reservation page
pub fn standard_blocks() -> Vec<TimeBlock> {
    let block = |label: &str, sh, sm, eh, em| {
        TimeBlock::new(
            label,
            NaiveTime::from_hms_opt(sh, sm, 0).unwrap_or_default(),
            NaiveTime::from_hms_opt(eh, em, 0).unwrap_or_default(),
        )
    };
    vec![
        block("5:00 PM - 6:30 PM", 17, 0, 18, 30),
        block("6:30 PM - 8:00 PM", 18, 30, 20, 0),
        block("8:00 PM - 9:30 PM", 20, 0, 21, 30),
        block("9:30 PM - 11:00 PM", 21, 30, 23, 0),
    ]
}
