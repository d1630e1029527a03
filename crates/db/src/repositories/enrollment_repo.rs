//! Repository for the `enrollments` table.
//!
//! Enrollment is the durable grant of course access. The
//! `uq_enrollments_student_course` constraint makes the store -- not
//! application logic -- the arbiter of concurrent grant attempts.

use sqlx::PgPool;

use learnhub_core::roles::PAYMENT_STATUS_SUCCEEDED;
use learnhub_core::types::DbId;

use crate::models::enrollment::Enrollment;
use crate::models::payment::{CreatePayment, Payment};

const COLUMNS: &str = "id, student_id, course_id, created_at";

const PAYMENT_COLUMNS: &str = "id, user_id, course_id, amount_cents, currency, status, \
    stripe_session_id, stripe_payment_id, created_at";

/// Provides enrollment lookups and the two grant paths (free and paid).
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a free enrollment (no payment record).
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Insert the Payment audit record and the Enrollment in ONE
    /// transaction: both commit or neither does.
    ///
    /// A concurrent duplicate (same session or same student/course pair)
    /// fails one of the unique constraints and rolls back the whole pair;
    /// the caller maps that to the idempotent already-enrolled outcome.
    pub async fn create_with_payment(
        pool: &PgPool,
        payment: &CreatePayment,
    ) -> Result<(Payment, Enrollment), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let payment_query = format!(
            "INSERT INTO payments
                (user_id, course_id, amount_cents, currency, status,
                 stripe_session_id, stripe_payment_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PAYMENT_COLUMNS}"
        );
        let payment_row = sqlx::query_as::<_, Payment>(&payment_query)
            .bind(payment.user_id)
            .bind(payment.course_id)
            .bind(payment.amount_cents)
            .bind(&payment.currency)
            .bind(PAYMENT_STATUS_SUCCEEDED)
            .bind(&payment.stripe_session_id)
            .bind(&payment.stripe_payment_id)
            .fetch_one(&mut *tx)
            .await?;

        let enrollment_query = format!(
            "INSERT INTO enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&enrollment_query)
            .bind(payment.user_id)
            .bind(payment.course_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((payment_row, enrollment))
    }

    /// Find the enrollment for a (student, course) pair, if any.
    pub async fn find_by_student_course(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments
             WHERE student_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Does an enrollment exist for this (student, course) pair?
    pub async fn exists(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2
             )",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }

    /// List a student's enrollments, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments
             WHERE student_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
