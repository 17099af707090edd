//! Month-view grid generation.
//!
//! A month view renders whole weeks: the rectangle of day-cells from the
//! week-start day on or before the 1st of the month through the end of
//! the week containing the month's last day. Leading and trailing cells
//! therefore belong to the adjacent months, and every row has exactly
//! seven cells.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Which day is rendered in the leftmost column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// US/Korea convention (Sunday leftmost).
    #[default]
    Sunday,
    /// ISO 8601 (Monday leftmost).
    Monday,
}

/// How many columns `weekday` is from the leftmost one.
fn days_from_week_start(weekday: Weekday, week_start: WeekStart) -> u64 {
    match week_start {
        WeekStart::Sunday => weekday.num_days_from_sunday() as u64,
        WeekStart::Monday => weekday.num_days_from_monday() as u64,
    }
}

/// Build the visible date grid for one month view.
///
/// Returns one midnight marker per rendered day-cell, in chronological
/// order with no gaps. The result always holds a whole number of weeks
/// and covers every day of the requested month.
///
/// # Errors
///
/// Returns [`GridError::InvalidDate`] if `month` is outside `1..=12` or
/// the date arithmetic leaves the representable range.
pub fn month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<Vec<NaiveDateTime>, GridError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| GridError::InvalidDate(format!("{year}-{month:02}")))?;
    let last = last_day_of_month(first).ok_or_else(|| out_of_range(year, month))?;

    let lead = days_from_week_start(first.weekday(), week_start);
    let tail = 6 - days_from_week_start(last.weekday(), week_start);

    let grid_start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| out_of_range(year, month))?;
    let grid_end = last
        .checked_add_days(Days::new(tail))
        .ok_or_else(|| out_of_range(year, month))?;

    let cell_count = (grid_end - grid_start).num_days() as usize + 1;
    Ok(grid_start
        .iter_days()
        .take(cell_count)
        .map(|day| day.and_time(NaiveTime::MIN))
        .collect())
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next_first| next_first.pred_opt())
}

fn out_of_range(year: i32, month: u32) -> GridError {
    GridError::InvalidDate(format!("{year}-{month:02} is out of range"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
