//! Route definitions for the `/payments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// POST /create-checkout-session -> start hosted checkout
/// POST /confirm-payment         -> confirm + enroll (idempotent)
/// POST /enroll-free             -> free-course enrollment
/// GET  /my                      -> own payment history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/create-checkout-session",
            post(payments::create_checkout_session),
        )
        .route("/confirm-payment", post(payments::confirm_payment))
        .route("/enroll-free", post(payments::enroll_free))
        .route("/my", get(payments::my_payments))
}
