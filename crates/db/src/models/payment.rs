//! Payment audit-record model.
//!
//! Payment rows are append-only evidence of settled external
//! transactions. They are never updated, and they are never the
//! authorization source -- the enrollment is.

use serde::Serialize;
use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Payment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    /// Settled amount in the currency's minor unit, as reported by the
    /// gateway.
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub stripe_session_id: String,
    pub stripe_payment_id: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for the single insert point (the atomic confirm transaction).
#[derive(Debug)]
pub struct CreatePayment {
    pub user_id: DbId,
    pub course_id: DbId,
    pub amount_cents: i64,
    pub currency: String,
    pub stripe_session_id: String,
    pub stripe_payment_id: Option<String>,
}
