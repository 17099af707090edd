//! Allocation configuration: per-day slot capacity and the end-of-day marker.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Default number of event bars a day-cell can display.
pub const MAX_SCHEDULE_COUNT: usize = 5;

/// The canonical end-of-day marker (`HH:MM:SS`).
///
/// An event stored as ending at this time-of-day represents an inclusive
/// all-day end; its span is stepped back one calendar day before the
/// occupied range is computed.
pub const END_OF_DAY: &str = "23:59:59";

/// Options for one allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// How many slots each day-cell offers before events overflow.
    pub slot_capacity: usize,
    /// Time-of-day that marks an inclusive all-day end timestamp.
    pub end_of_day: NaiveTime,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            slot_capacity: MAX_SCHEDULE_COUNT,
            end_of_day: end_of_day_time(),
        }
    }
}

impl AllocatorConfig {
    /// Config with a custom slot capacity and the canonical end-of-day marker.
    pub fn new(slot_capacity: usize) -> Self {
        Self {
            slot_capacity,
            ..Self::default()
        }
    }

    /// Config with a custom end-of-day marker string (`HH:MM:SS`).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMarker`] if `marker` is not a valid
    /// time of day.
    pub fn with_end_marker(slot_capacity: usize, marker: &str) -> Result<Self, GridError> {
        let end_of_day = NaiveTime::parse_from_str(marker, "%H:%M:%S")
            .map_err(|e| GridError::InvalidMarker(format!("'{marker}': {e}")))?;
        Ok(Self {
            slot_capacity,
            end_of_day,
        })
    }
}

fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("literal is a valid time of day")
}

// ── Tests ───────────────────────────────────────────────────────────────────
