//! The schedule event model shared by both allocation passes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar event as served by the schedule API.
///
/// Only the start and end instants participate in allocation; the rest is
/// display payload carried through untouched. Wire names are camelCase to
/// match the schedule payload (`startDateTime`, `endDateTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
}

impl Event {
    /// The calendar day the event starts on.
    pub fn start_day(&self) -> NaiveDate {
        self.start_date_time.date()
    }

    /// The last calendar day the event occupies.
    ///
    /// An end timestamp carrying the end-of-day marker is exclusive by
    /// convention (an inclusive all-day end), so it is stepped back one
    /// calendar day; any other end timestamp contributes its own day.
    pub fn effective_end_day(&self, end_of_day: NaiveTime) -> NaiveDate {
        let end = self.end_date_time.date();
        if self.end_date_time.time() == end_of_day {
            end.pred_opt().unwrap_or(end)
        } else {
            end
        }
    }

    /// Whether the event spans two or more calendar days.
    pub fn is_long_term(&self) -> bool {
        self.start_date_time.date() != self.end_date_time.date()
    }
}

/// Split a mixed schedule list into (long-term, single-day) event lists,
/// preserving the input order within each class.
pub fn partition(events: Vec<Event>) -> (Vec<Event>, Vec<Event>) {
    events.into_iter().partition(Event::is_long_term)
}

// ── Tests ───────────────────────────────────────────────────────────────────
