//! Repository for the `payments` table.
//!
//! Rows are inserted only inside
//! [`crate::repositories::EnrollmentRepo::create_with_payment`]; this
//! repository is read-only.

use sqlx::PgPool;

use learnhub_core::types::DbId;

use crate::models::payment::Payment;

const COLUMNS: &str = "id, user_id, course_id, amount_cents, currency, status, \
    stripe_session_id, stripe_payment_id, created_at";

pub struct PaymentRepo;

impl PaymentRepo {
    /// List a user's payment history, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
