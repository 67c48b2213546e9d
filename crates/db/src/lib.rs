//! Database access layer: pool construction, migrations, health probe,
//! models, repositories, and structured constraint classification.

pub mod models;
pub mod repositories;

use snd_core::generation::InsertViolation;
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Trivial round-trip probe. Used by the health endpoint and as the
/// auto-generation engine's pre-flight connectivity check.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Classify a sqlx error into the closed [`InsertViolation`] set by its
/// SQLSTATE code. Message text is never inspected; drivers localize and
/// reword messages, codes are stable.
///
/// - `23503` foreign key, `23505` unique, `23502` not-null
/// - class `22xxx` (data exception) maps to invalid input
pub fn violation_kind(err: &sqlx::Error) -> InsertViolation {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => InsertViolation::ForeignKey,
            Some("23505") => InsertViolation::Unique,
            Some("23502") => InsertViolation::NotNull,
            Some(code) if code.starts_with("22") => InsertViolation::InvalidInput,
            _ => InsertViolation::Other,
        },
        _ => InsertViolation::Other,
    }
}
