use crate::types::DbId;

/// Domain-level errors.
///
/// These carry a client-facing message and map 1:1 to an HTTP status at the
/// API boundary. Infrastructure failures (database down, gateway unreachable)
/// are NOT modelled here; they stay in their own error types and are
/// sanitized before leaving the service.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
