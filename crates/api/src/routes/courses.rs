//! Route definitions for the `/courses` resource, including nested lessons
//! and the per-course progress view.

use axum::routing::get;
use axum::Router;

use crate::handlers::{courses, lessons, progress};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                        -> list (public, role-aware)
/// POST   /                        -> create (instructor+)
/// GET    /{id}                    -> metadata (public, role-aware)
/// PATCH  /{id}                    -> update (instructor+)
/// DELETE /{id}                    -> delete (instructor+)
/// GET    /{id}/student            -> enrolled-student view
/// GET    /{id}/instructor         -> management view
/// GET    /{id}/progress           -> own progress
/// GET    /{id}/lessons            -> list lessons (gated)
/// POST   /{id}/lessons            -> create lesson (instructor+)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list).post(courses::create))
        .route(
            "/{id}",
            get(courses::get)
                .patch(courses::update)
                .delete(courses::delete),
        )
        .route("/{id}/student", get(courses::student_view))
        .route("/{id}/instructor", get(courses::instructor_view))
        .route("/{id}/progress", get(progress::for_course))
        .route(
            "/{id}/lessons",
            get(lessons::list_for_course).post(lessons::create),
        )
}
