//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use snd_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    /// Company personnel file number, unique per employee.
    pub file_number: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub file_number: String,
    pub name: String,
}
