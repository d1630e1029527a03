//! Handlers for the `/payments` resource: checkout, confirmation, and the
//! free-enroll path.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::models::payment::Payment;
use learnhub_db::repositories::PaymentRepo;

use crate::enrollment::{self, ConfirmOutcome};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStudent;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub course_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EnrollFreeRequest {
    pub course_id: DbId,
}

/// POST /api/v1/payments/create-checkout-session
///
/// Returns the hosted checkout URL for a paid course. Nothing is written
/// locally. Student-only: privileged roles have no business enrolling.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let url = enrollment::create_checkout(
        &state.pool,
        state.gateway.as_ref(),
        &state.config,
        user.user_id,
        input.course_id,
    )
    .await?;

    Ok(Json(ApiResponse::new(
        "Checkout session created",
        json!({ "checkout_url": url }),
    )))
}

/// POST /api/v1/payments/confirm-payment
///
/// Confirms a settled checkout session and grants the enrollment. Safe to
/// retry: a repeat confirm reports "Already enrolled" without writing.
pub async fn confirm_payment(
    State(state): State<AppState>,
    RequireStudent(_user): RequireStudent,
    Json(input): Json<ConfirmRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let outcome =
        enrollment::confirm_payment(&state.pool, state.gateway.as_ref(), &input.session_id)
            .await?;

    let response = match outcome {
        ConfirmOutcome::Enrolled {
            payment,
            enrollment,
        } => ApiResponse::new(
            "Payment confirmed and enrollment created",
            json!({ "payment": payment, "enrollment": enrollment }),
        ),
        ConfirmOutcome::AlreadyEnrolled => {
            ApiResponse::new("Already enrolled", serde_json::Value::Null)
        }
    };

    Ok(Json(response))
}

/// POST /api/v1/payments/enroll-free
///
/// Direct enrollment into a free course; no gateway involvement.
pub async fn enroll_free(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    Json(input): Json<EnrollFreeRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Enrollment>>)> {
    let enrollment =
        enrollment::enroll_free(&state.pool, user.user_id, input.course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Enrolled", enrollment)),
    ))
}

/// GET /api/v1/payments/my
///
/// The caller's payment history, newest first.
pub async fn my_payments(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Payment>>>> {
    let payments = PaymentRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::new("Payments retrieved", payments)))
}
