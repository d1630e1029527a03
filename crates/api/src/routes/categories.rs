//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /       -> list (public)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get (public)
/// PATCH  /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            get(categories::get)
                .patch(categories::update)
                .delete(categories::delete),
        )
}
