//! Repository for the `timesheets` table.
//!
//! Generated rows are guarded twice against duplication: the engine's
//! existence check before insert, and the partial unique index
//! `uq_timesheets_employee_date` as the last line of defense against the
//! read/write race.

use chrono::NaiveDate;
use sqlx::PgPool;

use snd_core::generation::GENERATED_STATUS;
use snd_core::types::DbId;

use crate::models::timesheet::{NewGeneratedTimesheet, Timesheet, TimesheetListQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, employee_id, assignment_id, project_id, rental_id, date, \
    start_time, end_time, hours_worked, overtime_hours, status, \
    description, notes, created_at, updated_at";

/// Maximum page size for timesheet listing.
const MAX_LIMIT: i64 = 200;

/// Default page size for timesheet listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides read and write operations for timesheets.
pub struct TimesheetRepo;

impl TimesheetRepo {
    /// Whether a non-soft-deleted timesheet exists for `(employee_id, date)`.
    ///
    /// This is the auto-generation engine's idempotency check.
    pub async fn exists_for_day(
        pool: &PgPool,
        employee_id: DbId,
        date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM timesheets \
                 WHERE employee_id = $1 AND date = $2 AND deleted_at IS NULL \
             )",
        )
        .bind(employee_id)
        .bind(date)
        .fetch_one(pool)
        .await
    }

    /// Insert one generated timesheet in `draft` status, returning the row.
    pub async fn insert_generated(
        pool: &PgPool,
        input: &NewGeneratedTimesheet,
    ) -> Result<Timesheet, sqlx::Error> {
        let query = format!(
            "INSERT INTO timesheets
                 (employee_id, assignment_id, project_id, rental_id, date,
                  start_time, end_time, hours_worked, overtime_hours, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '{GENERATED_STATUS}')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(input.employee_id)
            .bind(input.assignment_id)
            .bind(input.project_id)
            .bind(input.rental_id)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.hours_worked)
            .bind(input.overtime_hours)
            .fetch_one(pool)
            .await
    }

    /// Find a timesheet by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Timesheet>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM timesheets WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List timesheets with optional employee and date-range filters,
    /// newest date first. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        params: &TimesheetListQuery,
    ) -> Result<Vec<Timesheet>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM timesheets \
             WHERE deleted_at IS NULL \
               AND ($1::bigint IS NULL OR employee_id = $1) \
               AND ($2::date IS NULL OR date >= $2) \
               AND ($3::date IS NULL OR date <= $3) \
             ORDER BY date DESC, employee_id \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(params.employee_id)
            .bind(params.from)
            .bind(params.to)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a timesheet by ID. Returns `true` if a row was marked
    /// deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE timesheets SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count non-soft-deleted timesheets for one employee. Test and
    /// reporting helper.
    pub async fn count_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM timesheets WHERE employee_id = $1 AND deleted_at IS NULL",
        )
        .bind(employee_id)
        .fetch_one(pool)
        .await
    }
}
