use async_trait::async_trait;

use learnhub_core::types::DbId;

use crate::error::GatewayError;

/// What the enrollment flow needs to open a hosted checkout page.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    pub user_id: DbId,
    pub course_id: DbId,
    pub course_title: String,
    /// Prefills the payer's email on the hosted page.
    pub customer_email: String,
    /// Price in the currency's minor unit (cents).
    pub amount_cents: i64,
    /// Lowercase ISO 4217 code, e.g. `"usd"`.
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A freshly created hosted checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    /// URL the client is redirected to for payment.
    pub url: String,
}

/// The state of a checkout session as reported by the provider.
#[derive(Debug, Clone)]
pub struct SessionDetails {
    pub id: String,
    /// Provider payment status, `"paid"` once the charge settled.
    pub payment_status: String,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    /// Provider-side payment identifier, present after settlement.
    pub payment_id: Option<String>,
    /// Email the session was created with, when the provider reports it.
    pub customer_email: Option<String>,
    /// `user_id` from the session metadata, if the session carries it.
    pub user_id: Option<DbId>,
    /// `course_id` from the session metadata, if the session carries it.
    pub course_id: Option<DbId>,
}

impl SessionDetails {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Hosted-checkout provider seam.
///
/// `create_session` must stamp the user and course ids into the session's
/// metadata so that `retrieve_session` can return them later; the
/// confirmation flow trusts the metadata, not the client.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CheckoutSession, GatewayError>;

    async fn retrieve_session(&self, session_id: &str) -> Result<SessionDetails, GatewayError>;
}
