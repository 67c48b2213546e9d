//! Repository for the `employee_assignments` table.

use sqlx::PgPool;

use snd_core::types::DbId;

use crate::models::assignment::{Assignment, CreateAssignment, STATUS_ACTIVE, TYPE_MANUAL};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, employee_id, project_id, rental_id, name, location, type, status, \
    notes, start_date, end_date, created_at, updated_at";

/// Provides read and write operations for employee assignments.
///
/// The auto-generation engine only ever reads through [`Self::list_all`];
/// creation and editing belong to the CRUD surface.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_assignments
                 (employee_id, project_id, rental_id, name, location, type, status, notes,
                  start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{TYPE_MANUAL}'),
                     COALESCE($7, '{STATUS_ACTIVE}'), $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.employee_id)
            .bind(input.project_id)
            .bind(input.rental_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.kind)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every assignment in insertion order, with **no status filter**.
    ///
    /// Generation deliberately processes inactive and closed assignments
    /// too, so any timesheet gap up to "today" gets backfilled. The fixed
    /// ordering keeps a run's error list reproducible.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_assignments ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query)
            .fetch_all(pool)
            .await
    }

    /// List assignments for one employee in insertion order.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM employee_assignments WHERE employee_id = $1 ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }
}
