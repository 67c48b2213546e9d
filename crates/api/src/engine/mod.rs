//! Timesheet auto-generation engine.
//!
//! One run walks every employee assignment and materializes one draft
//! timesheet per calendar day between the assignment start date and
//! "today", skipping days already covered. The single-flight guard keeps
//! runs from overlapping within this process; the store seam keeps the
//! orchestration testable without a database.

pub mod clock;
pub mod generator;
pub mod guard;
pub mod store;
