//! Generation window derivation for employee assignments.
//!
//! An assignment's window is the inclusive range of calendar days the
//! auto-generation engine materializes timesheets for: from the assignment
//! start date up to its end date, clamped so generation never runs ahead
//! of "today". The window length is bounded by a limit derived from the
//! earliest date an assignment can legitimately carry, so a malformed
//! range is rejected up front instead of guarded by an arbitrary
//! iteration cap inside the day loop.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// No assignment in the system predates this. Windows are bounded by the
/// number of days between this date and "today".
pub fn earliest_assignment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is a valid date")
}

/// Maximum plausible window length in days, derived from
/// [`earliest_assignment_date`]. Never less than 1.
pub fn max_window_days(today: NaiveDate) -> i64 {
    ((today - earliest_assignment_date()).num_days() + 1).max(1)
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Inclusive range of calendar days to generate timesheets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GenerationWindow {
    /// Number of calendar days in the window. Always >= 1.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate the window's days in ascending order, both ends included.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Why an assignment produces no generation window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Start date lies after the effective end date. Covers both an
    /// inverted `start/end` pair and a start date in the future.
    #[error("start date {start} is after effective end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    /// The window is longer than any plausible assignment history.
    #[error("window of {days} days exceeds the {max}-day bound")]
    TooLarge { days: i64, max: i64 },
}

/// Derive the generation window for one assignment.
///
/// The effective end is the assignment's `end_date` when present and not
/// after `today`; otherwise `today`. Generation never produces timesheets
/// for future dates, even when an assignment's end date lies in the
/// future.
pub fn effective_window(
    start: NaiveDate,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<GenerationWindow, WindowError> {
    let end = end_date.filter(|e| *e <= today).unwrap_or(today);

    if start > end {
        return Err(WindowError::StartAfterEnd { start, end });
    }

    let window = GenerationWindow { start, end };
    let max = max_window_days(today);
    if window.days() > max {
        return Err(WindowError::TooLarge {
            days: window.days(),
            max,
        });
    }

    Ok(window)
}
