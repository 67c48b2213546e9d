//! Store seam between the generation engine and the database.

use async_trait::async_trait;
use chrono::NaiveDate;

use snd_core::generation::InsertViolation;
use snd_core::types::DbId;
use snd_db::models::assignment::Assignment;
use snd_db::models::timesheet::NewGeneratedTimesheet;
use snd_db::repositories::{AssignmentRepo, TimesheetRepo};
use snd_db::DbPool;

/// A store operation failure with its closed classification attached.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct StoreError {
    pub kind: InsertViolation,
    pub detail: String,
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self {
            kind: snd_db::violation_kind(&err),
            detail: err.to_string(),
        }
    }
}

/// Everything the generation engine needs from persistent storage.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Trivial connectivity probe, run before any work starts.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All assignments in a fixed order, with no status filter.
    async fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError>;

    /// Whether a non-soft-deleted timesheet exists at `(employee_id, date)`.
    async fn timesheet_exists(
        &self,
        employee_id: DbId,
        date: NaiveDate,
    ) -> Result<bool, StoreError>;

    /// Insert one generated timesheet.
    async fn insert_timesheet(&self, input: &NewGeneratedTimesheet) -> Result<(), StoreError>;
}

/// Postgres-backed store used in production.
pub struct PgGenerationStore {
    pool: DbPool,
}

impl PgGenerationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationStore for PgGenerationStore {
    async fn ping(&self) -> Result<(), StoreError> {
        snd_db::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        Ok(AssignmentRepo::list_all(&self.pool).await?)
    }

    async fn timesheet_exists(
        &self,
        employee_id: DbId,
        date: NaiveDate,
    ) -> Result<bool, StoreError> {
        Ok(TimesheetRepo::exists_for_day(&self.pool, employee_id, date).await?)
    }

    async fn insert_timesheet(&self, input: &NewGeneratedTimesheet) -> Result<(), StoreError> {
        TimesheetRepo::insert_generated(&self.pool, input).await?;
        Ok(())
    }
}
