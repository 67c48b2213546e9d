//! Timesheet entity model and DTOs.
//!
//! One row records one day's work for one employee. At most one
//! non-soft-deleted row may exist per `(employee_id, date)`; the
//! auto-generation engine enforces this with an existence check and the
//! schema backs it with a partial unique index.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use snd_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `timesheets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Timesheet {
    pub id: DbId,
    pub employee_id: DbId,
    pub assignment_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    pub status: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO used by the auto-generation engine.
///
/// Generated rows always carry `draft` status; the repository sets it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeneratedTimesheet {
    pub employee_id: DbId,
    pub assignment_id: DbId,
    pub project_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub hours_worked: f64,
    pub overtime_hours: f64,
}

/// Query parameters for `GET /api/v1/timesheets`.
#[derive(Debug, Deserialize)]
pub struct TimesheetListQuery {
    /// Filter by employee.
    pub employee_id: Option<DbId>,
    /// Inclusive lower bound on `date`.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on `date`.
    pub to: Option<NaiveDate>,
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
