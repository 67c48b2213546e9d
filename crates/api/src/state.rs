use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::guard::GenerationGuard;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: snd_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Single-flight latch for timesheet auto-generation runs.
    pub generation_guard: Arc<GenerationGuard>,
}
