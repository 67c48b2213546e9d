//! Handlers for the `/assignments` resource.
//!
//! Assignments feed the auto-generation engine; creating one with an
//! inverted date range is rejected here so malformed windows stay rare,
//! but the engine still tolerates them (legacy rows predate this check).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use snd_core::error::CoreError;
use snd_core::types::DbId;
use snd_db::models::assignment::CreateAssignment;
use snd_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/assignments`.
#[derive(Debug, Deserialize)]
pub struct AssignmentListQuery {
    /// Restrict to one employee's assignments.
    pub employee_id: Option<DbId>,
}

/// POST /api/v1/assignments
///
/// Create an assignment. Returns 201 with the created row. A missing
/// employee surfaces as 400 via the foreign-key classification.
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<impl IntoResponse> {
    if let Some(end) = input.end_date {
        if end < input.start_date {
            return Err(AppError::Core(CoreError::Validation(format!(
                "end_date {end} is before start_date {}",
                input.start_date
            ))));
        }
    }

    let assignment = AssignmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        assignment_id = assignment.id,
        employee_id = assignment.employee_id,
        "Assignment created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: assignment })))
}

/// GET /api/v1/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Query(params): Query<AssignmentListQuery>,
) -> AppResult<impl IntoResponse> {
    let assignments = match params.employee_id {
        Some(employee_id) => AssignmentRepo::list_by_employee(&state.pool, employee_id).await?,
        None => AssignmentRepo::list_all(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: assignments }))
}

/// GET /api/v1/assignments/{id}
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))?;
    Ok(Json(DataResponse { data: assignment }))
}
