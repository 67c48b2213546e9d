//! Employee assignment entity model and DTOs.
//!
//! An assignment links an employee to a project or rental for a bounded
//! (or open-ended) period. Assignments drive which dates the timesheet
//! auto-generation engine materializes rows for; the engine only ever
//! reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snd_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Default assignment status. Free-form, not gating: generation processes
/// assignments regardless of status so historical gaps get backfilled.
pub const STATUS_ACTIVE: &str = "active";

/// Default assignment entry type for manually created assignments.
pub const TYPE_MANUAL: &str = "manual";

/// A row from the `employee_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Entry type (`manual`, `project`, `rental`).
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub notes: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Defaults to [`TYPE_MANUAL`] if omitted.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Defaults to [`STATUS_ACTIVE`] if omitted.
    pub status: Option<String>,
    pub notes: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
