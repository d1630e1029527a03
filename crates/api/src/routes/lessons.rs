//! Route definitions for single-lesson operations.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{lessons, progress};
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// GET    /{id}            -> get lesson (gated)
/// PATCH  /{id}            -> update (instructor+)
/// DELETE /{id}            -> delete (instructor+)
/// PATCH  /{id}/progress   -> upsert completion (enrolled)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(lessons::get)
                .patch(lessons::update)
                .delete(lessons::delete),
        )
        .route("/{id}/progress", patch(progress::update))
}
