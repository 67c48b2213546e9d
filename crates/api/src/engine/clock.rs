//! Clock seam for the generation engine.

use chrono::NaiveDate;

/// Supplies the calendar date a generation run treats as "today".
///
/// Read once at the start of a run, so the run's notion of today is fixed
/// for its whole duration even when it crosses midnight.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the current UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}
