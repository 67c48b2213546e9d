//! Handlers for the `/timesheets` resource, including the auto-generation
//! trigger.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use snd_core::error::CoreError;
use snd_core::generation::MSG_ALREADY_RUNNING;
use snd_core::types::DbId;
use snd_db::models::timesheet::TimesheetListQuery;
use snd_db::repositories::TimesheetRepo;

use crate::engine::clock::UtcClock;
use crate::engine::generator::AutoGenerator;
use crate::engine::store::PgGenerationStore;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/timesheets/auto-generate
///
/// Run the auto-generation engine and return its aggregated result as the
/// response body. 200 for completed runs (including partial failures and
/// no-op runs), 409 when another run holds the single-flight guard, 503
/// for run-level store failures.
pub async fn auto_generate(State(state): State<AppState>) -> impl IntoResponse {
    let generator = AutoGenerator::new(
        PgGenerationStore::new(state.pool.clone()),
        UtcClock,
        Arc::clone(&state.generation_guard),
    );

    let result = generator.run().await;

    let status = if result.success {
        StatusCode::OK
    } else if result.message == MSG_ALREADY_RUNNING {
        StatusCode::CONFLICT
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(result))
}

/// GET /api/v1/timesheets
///
/// List timesheets, optionally filtered by `employee_id` and the
/// inclusive `from`/`to` date range.
pub async fn list_timesheets(
    State(state): State<AppState>,
    Query(params): Query<TimesheetListQuery>,
) -> AppResult<impl IntoResponse> {
    let timesheets = TimesheetRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: timesheets }))
}

/// GET /api/v1/timesheets/{id}
pub async fn get_timesheet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let timesheet = TimesheetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Timesheet",
            id,
        }))?;
    Ok(Json(DataResponse { data: timesheet }))
}

/// DELETE /api/v1/timesheets/{id}
///
/// Soft-delete. The date becomes generatable again on the next run.
pub async fn delete_timesheet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TimesheetRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Timesheet",
            id,
        }));
    }
    tracing::info!(timesheet_id = id, "Timesheet soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}
