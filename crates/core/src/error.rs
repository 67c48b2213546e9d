//! Shared domain error type.

use crate::types::DbId;

/// Domain-level error returned by core logic and repositories' callers.
///
/// HTTP mapping lives in `snd-api`; this type carries no status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by ID found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller-supplied input failed a business rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested change conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected internal failure. Message is logged, not shown verbatim.
    #[error("Internal error: {0}")]
    Internal(String),
}
