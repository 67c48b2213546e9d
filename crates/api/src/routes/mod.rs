//! Route tree construction.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                      list, create
/// /employees/{id}                 get
///
/// /assignments                    list, create
/// /assignments/{id}               get
///
/// /timesheets                     list
/// /timesheets/{id}                get, soft delete
/// /timesheets/auto-generate       run the generation engine (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route("/employees/{id}", get(handlers::employees::get_employee))
        .route(
            "/assignments",
            get(handlers::assignments::list_assignments)
                .post(handlers::assignments::create_assignment),
        )
        .route(
            "/assignments/{id}",
            get(handlers::assignments::get_assignment),
        )
        .route(
            "/timesheets",
            get(handlers::timesheets::list_timesheets),
        )
        .route(
            "/timesheets/auto-generate",
            post(handlers::timesheets::auto_generate),
        )
        .route(
            "/timesheets/{id}",
            get(handlers::timesheets::get_timesheet).delete(handlers::timesheets::delete_timesheet),
        )
}
