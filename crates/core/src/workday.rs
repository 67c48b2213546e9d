//! Working-day rules for generated timesheets.
//!
//! Fixed defaults: eight hours on a regular weekday, zero on the weekly
//! rest day, never any pre-filled overtime. Holidays, regional weekend
//! conventions other than Friday, and partial-day assignments are a known
//! simplification; approvers adjust hours after generation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Designated weekly rest day.
pub const REST_DAY: Weekday = Weekday::Fri;

/// Hours recorded for a regular working day.
pub const REGULAR_HOURS: f64 = 8.0;

/// Overtime is never pre-filled by generation.
pub const DEFAULT_OVERTIME_HOURS: f64 = 0.0;

/// Generated shifts start at 06:00 wall-clock on the timesheet's date.
pub const SHIFT_START_HOUR: u32 = 6;

/// Generated shifts end at 16:00 wall-clock on the timesheet's date.
pub const SHIFT_END_HOUR: u32 = 16;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Whether the given date falls on the weekly rest day.
pub fn is_rest_day(date: NaiveDate) -> bool {
    date.weekday() == REST_DAY
}

/// Hours worked and overtime hours to record for `date`.
pub fn day_hours(date: NaiveDate) -> (f64, f64) {
    if is_rest_day(date) {
        (0.0, DEFAULT_OVERTIME_HOURS)
    } else {
        (REGULAR_HOURS, DEFAULT_OVERTIME_HOURS)
    }
}

/// Shift start timestamp for `date`. Wall-clock, no timezone conversion
/// applied to the date component.
pub fn shift_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(SHIFT_START_HOUR, 0, 0).expect("06:00:00 is valid"))
}

/// Shift end timestamp for `date`.
pub fn shift_end(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(SHIFT_END_HOUR, 0, 0).expect("16:00:00 is valid"))
}
