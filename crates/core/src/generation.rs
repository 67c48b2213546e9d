//! Result type and failure taxonomy for a timesheet auto-generation run.
//!
//! A run aggregates per-assignment and per-day failures into an ordered
//! error list without flipping the run's `success` flag; `success: false`
//! is reserved for run-level failures (guard contention, connectivity,
//! assignment fetch). The engine itself lives in `snd-api`.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Run-level messages
// ---------------------------------------------------------------------------

/// Returned when a run is refused because another is still in flight.
pub const MSG_ALREADY_RUNNING: &str = "Auto-generation already in progress";

/// Returned when the connectivity probe fails before any work starts.
pub const MSG_CONNECTION_FAILED: &str = "Database connection failed";

/// Returned when loading the assignment list fails.
pub const MSG_FETCH_FAILED: &str = "Failed to load employee assignments";

/// Returned when there are no assignments to process.
pub const MSG_NO_ASSIGNMENTS: &str = "No employee assignments found to process";

/// Status every generated timesheet is created in. Approval workflows
/// move it forward later; generation never touches it again.
pub const GENERATED_STATUS: &str = "draft";

// ---------------------------------------------------------------------------
// Insert failure classification
// ---------------------------------------------------------------------------

/// Closed classification of timesheet insert failures, derived from the
/// store driver's structured error (SQLSTATE), never from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertViolation {
    /// Referenced employee, assignment, project, or rental is missing.
    ForeignKey,
    /// A timesheet already exists for this employee and date.
    Unique,
    /// A required timesheet field was missing.
    NotNull,
    /// A value was rejected by the store (bad date, out-of-range number).
    InvalidInput,
    /// Anything that does not match a known constraint class.
    Other,
}

impl fmt::Display for InsertViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ForeignKey => "foreign key violation",
            Self::Unique => "unique constraint violation",
            Self::NotNull => "not-null violation",
            Self::InvalidInput => "invalid input",
            Self::Other => "unclassified database error",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// How far through the assignment list a run got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationProgress {
    /// Assignments processed so far.
    pub current: u32,
    /// Total assignments in this run.
    pub total: u32,
    /// `round(current / total * 100)`, in `0..=100`.
    pub percentage: u32,
}

impl GenerationProgress {
    /// Build a progress snapshot. An empty run reports 100%.
    pub fn of(current: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            100
        } else {
            (f64::from(current) / f64::from(total) * 100.0).round() as u32
        };
        Self {
            current,
            total,
            percentage,
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Aggregated outcome of one auto-generation run. Serialized as the HTTP
/// response body; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub created: u64,
    /// Ordered, human-readable, one entry per distinct failure.
    pub errors: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<GenerationProgress>,
}

impl GenerationResult {
    /// Another run holds the single-flight guard.
    pub fn already_running() -> Self {
        Self::run_failure(MSG_ALREADY_RUNNING, MSG_ALREADY_RUNNING.to_string())
    }

    /// The connectivity probe failed; no work was attempted.
    pub fn connection_failed(detail: String) -> Self {
        Self::run_failure(MSG_CONNECTION_FAILED, detail)
    }

    /// Loading the assignment list failed; no timesheets were created.
    pub fn fetch_failed(detail: String) -> Self {
        Self::run_failure(MSG_FETCH_FAILED, detail)
    }

    /// Nothing to process. An empty system is a successful no-op run.
    pub fn no_assignments() -> Self {
        Self {
            success: true,
            created: 0,
            errors: vec![MSG_NO_ASSIGNMENTS.to_string()],
            message: MSG_NO_ASSIGNMENTS.to_string(),
            progress: None,
        }
    }

    /// A run that walked the full assignment list. Per-assignment and
    /// per-day failures ride along in `errors` without affecting
    /// `success`.
    pub fn completed(created: u64, errors: Vec<String>, progress: GenerationProgress) -> Self {
        Self {
            success: true,
            created,
            message: format!(
                "Auto-generation completed. Created: {created} timesheets using assignment start and end dates"
            ),
            errors,
            progress: Some(progress),
        }
    }

    fn run_failure(message: &str, detail: String) -> Self {
        Self {
            success: false,
            created: 0,
            errors: vec![detail],
            message: message.to_string(),
            progress: None,
        }
    }
}
