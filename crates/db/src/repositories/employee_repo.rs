//! Repository for the `employees` table.

use sqlx::PgPool;

use snd_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, file_number, name, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (file_number, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.file_number)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by file number. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM employees WHERE deleted_at IS NULL ORDER BY file_number");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }
}
