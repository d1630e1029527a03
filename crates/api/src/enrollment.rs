//! The paid-enrollment flow: checkout creation and payment confirmation.
//!
//! All functions take the pool and gateway explicitly; there is no global
//! handle. The flow never persists a pending state -- a checkout session
//! lives entirely at the provider until confirmation, and the session
//! metadata (`user_id`, `course_id`) is the only join key back to us.
//!
//! Confirmation is idempotent: repeat confirms for an already-enrolled pair
//! report success without writing, and a lost insert race against a
//! concurrent confirm is converted into the same outcome.

use learnhub_core::error::CoreError;
use learnhub_core::roles::CourseStatus;
use learnhub_core::types::DbId;
use learnhub_db::models::course::Course;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::models::payment::{CreatePayment, Payment};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};
use learnhub_db::DbPool;
use learnhub_payments::{CheckoutGateway, CreateSessionRequest};

use crate::config::ServerConfig;
use crate::error::{is_unique_violation, AppError, AppResult};

/// Result of a payment confirmation.
#[derive(Debug)]
pub enum ConfirmOutcome {
    /// The payment was recorded and the enrollment granted.
    Enrolled {
        payment: Payment,
        enrollment: Enrollment,
    },
    /// The student already held an enrollment for this course; nothing was
    /// written.
    AlreadyEnrolled,
}

/// Create a hosted checkout session for a paid course.
///
/// Returns the provider URL the client redirects to. Nothing is written
/// locally; the enrollment happens at confirmation time.
pub async fn create_checkout(
    pool: &DbPool,
    gateway: &dyn CheckoutGateway,
    config: &ServerConfig,
    user_id: DbId,
    course_id: DbId,
) -> AppResult<String> {
    let course = find_course(pool, course_id).await?;

    // Free courses never reach the gateway.
    if course.is_free {
        return Err(AppError::Core(CoreError::Validation(
            "Course is free, no payment required".into(),
        )));
    }
    if course.parsed_status() != CourseStatus::Published {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    if EnrollmentRepo::exists(pool, user_id, course_id).await? {
        return Err(AppError::Core(CoreError::Validation(
            "You are already enrolled in this course".into(),
        )));
    }

    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let request = CreateSessionRequest {
        user_id,
        course_id,
        course_title: course.title.clone(),
        customer_email: user.email,
        amount_cents: course.price_cents,
        currency: "usd".to_string(),
        success_url: format!(
            "{}/payment/success?session_id={{CHECKOUT_SESSION_ID}}",
            config.frontend_url
        ),
        cancel_url: format!("{}/payment/cancel", config.frontend_url),
    };

    let session = gateway.create_session(&request).await?;
    tracing::info!(user_id, course_id, session_id = %session.id, "Checkout session created");

    Ok(session.url)
}

/// Confirm a checkout session and grant the enrollment.
///
/// The provider session is the source of truth for everything: settlement
/// state, amount, currency, and the (user, course) pair from metadata.
/// The Payment record and Enrollment are committed in one transaction.
pub async fn confirm_payment(
    pool: &DbPool,
    gateway: &dyn CheckoutGateway,
    session_id: &str,
) -> AppResult<ConfirmOutcome> {
    let session = gateway.retrieve_session(session_id).await?;

    if !session.is_paid() {
        return Err(AppError::Core(CoreError::Validation(
            "Payment not completed".into(),
        )));
    }

    let (user_id, course_id) = match (session.user_id, session.course_id) {
        (Some(u), Some(c)) => (u, c),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Invalid session metadata".into(),
            )))
        }
    };

    // Repeat confirm for a pair that already enrolled: success, no writes.
    if EnrollmentRepo::exists(pool, user_id, course_id).await? {
        return Ok(ConfirmOutcome::AlreadyEnrolled);
    }

    let (amount_cents, currency) = match (session.amount_cents, session.currency) {
        (Some(a), Some(c)) => (a, c),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Invalid session data".into(),
            )))
        }
    };

    let input = CreatePayment {
        user_id,
        course_id,
        amount_cents,
        currency,
        stripe_session_id: session.id.clone(),
        stripe_payment_id: session.payment_id.clone(),
    };

    match EnrollmentRepo::create_with_payment(pool, &input).await {
        Ok((payment, enrollment)) => {
            tracing::info!(
                user_id,
                course_id,
                payment_id = payment.id,
                "Enrollment granted"
            );
            Ok(ConfirmOutcome::Enrolled {
                payment,
                enrollment,
            })
        }
        // Lost the race against a concurrent confirm of the same session or
        // pair. The transaction rolled back; the winner's records stand.
        Err(err) if is_unique_violation(&err) => Ok(ConfirmOutcome::AlreadyEnrolled),
        Err(err) => Err(err.into()),
    }
}

/// Enroll a student in a free course. No payment record is written.
pub async fn enroll_free(
    pool: &DbPool,
    user_id: DbId,
    course_id: DbId,
) -> AppResult<Enrollment> {
    let course = find_course(pool, course_id).await?;

    if !course.is_free {
        return Err(AppError::Core(CoreError::Validation(
            "Course is not free, payment required".into(),
        )));
    }
    if course.parsed_status() != CourseStatus::Published {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    if EnrollmentRepo::exists(pool, user_id, course_id).await? {
        return Err(AppError::Core(CoreError::Validation(
            "You are already enrolled in this course".into(),
        )));
    }

    match EnrollmentRepo::create(pool, user_id, course_id).await {
        Ok(enrollment) => Ok(enrollment),
        Err(err) if is_unique_violation(&err) => Err(AppError::Core(CoreError::Validation(
            "You are already enrolled in this course".into(),
        ))),
        Err(err) => Err(err.into()),
    }
}

async fn find_course(pool: &DbPool, course_id: DbId) -> AppResult<Course> {
    CourseRepo::find_by_id(pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))
}
