pub mod auth;
pub mod categories;
pub mod courses;
pub mod health;
pub mod lessons;
pub mod payments;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                        register (public)
/// /auth/login                           login (public)
/// /auth/refresh                         refresh (public)
/// /auth/logout                          logout (requires auth)
///
/// /users/me                             get, patch own profile
/// /users/me/enrollments                 own enrollments
/// /users                                list (admin)
/// /users/{id}/status                    patch status (admin)
/// /users/{id}/role                      patch role (admin)
/// /users/{id}                           delete (admin)
///
/// /categories                           list (public), create (admin)
/// /categories/{id}                      get (public), patch, delete (admin)
///
/// /courses                              list (public), create (instructor+)
/// /courses/{id}                         get (public), patch, delete (instructor+)
/// /courses/{id}/student                 enrolled-student view (auth)
/// /courses/{id}/instructor              management view (owner or admin)
/// /courses/{id}/progress                own progress across the course
/// /courses/{id}/lessons                 list (gated), create (instructor+)
///
/// /lessons/{id}                         get (gated), patch, delete (instructor+)
/// /lessons/{id}/progress                upsert completion (enrolled)
///
/// /payments/create-checkout-session     start hosted checkout (student)
/// /payments/confirm-payment             confirm + enroll (student, idempotent)
/// /payments/enroll-free                 free-course enrollment (student)
/// /payments/my                          own payment history (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/categories", categories::router())
        .nest("/courses", courses::router())
        .nest("/lessons", lessons::router())
        .nest("/payments", payments::router())
}
