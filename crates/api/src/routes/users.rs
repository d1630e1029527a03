//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /me              -> own profile
/// PATCH  /me              -> update own profile
/// GET    /me/enrollments  -> own enrollments
/// GET    /                -> list users (admin)
/// PATCH  /{id}/status   -> update status (admin)
/// PATCH  /{id}/role     -> update role (admin)
/// DELETE /{id}          -> delete user (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::me).patch(users::update_me))
        .route("/me/enrollments", get(users::my_enrollments))
        .route("/", get(users::list))
        .route("/{id}/status", patch(users::update_status))
        .route("/{id}/role", patch(users::update_role))
        .route("/{id}", delete(users::delete))
}
