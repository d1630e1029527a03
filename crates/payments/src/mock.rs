//! In-process gateway for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::gateway::{CheckoutGateway, CheckoutSession, CreateSessionRequest, SessionDetails};

/// Records created sessions and serves scripted retrievals.
///
/// Sessions start unpaid; tests call [`MockGateway::settle`] to flip one to
/// paid, or [`MockGateway::script`] to preload an arbitrary state.
#[derive(Default)]
pub struct MockGateway {
    counter: AtomicU64,
    sessions: Mutex<HashMap<String, SessionDetails>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a session as paid, as the provider would after settlement.
    pub fn settle(&self, session_id: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(session_id) {
            session.payment_status = "paid".to_string();
            session.payment_id = Some(format!("pi_mock_{}", session.id));
        }
    }

    /// Preload a session in an arbitrary state.
    pub fn script(&self, details: SessionDetails) {
        self.sessions
            .lock()
            .unwrap()
            .insert(details.id.clone(), details);
    }
}

#[async_trait]
impl CheckoutGateway for MockGateway {
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let id = format!("cs_mock_{n}");
        let url = format!("https://checkout.example.test/{id}");

        self.sessions.lock().unwrap().insert(
            id.clone(),
            SessionDetails {
                id: id.clone(),
                payment_status: "unpaid".to_string(),
                amount_cents: Some(request.amount_cents),
                currency: Some(request.currency.clone()),
                payment_id: None,
                customer_email: Some(request.customer_email.clone()),
                user_id: Some(request.user_id),
                course_id: Some(request.course_id),
            },
        );

        Ok(CheckoutSession { id, url })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<SessionDetails, GatewayError> {
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .ok_or_else(|| GatewayError::SessionNotFound(session_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateSessionRequest {
        CreateSessionRequest {
            user_id: 1,
            course_id: 2,
            course_title: "Intro to Testing".to_string(),
            customer_email: "payer@example.com".to_string(),
            amount_cents: 4999,
            currency: "usd".to_string(),
            success_url: "https://app.example.test/success".to_string(),
            cancel_url: "https://app.example.test/cancel".to_string(),
        }
    }

    #[tokio::test]
    async fn created_sessions_start_unpaid_and_carry_metadata() {
        let gateway = MockGateway::new();
        let session = gateway.create_session(&request()).await.unwrap();

        let details = gateway.retrieve_session(&session.id).await.unwrap();
        assert!(!details.is_paid());
        assert_eq!(details.user_id, Some(1));
        assert_eq!(details.course_id, Some(2));
        assert_eq!(details.amount_cents, Some(4999));
        assert_eq!(details.customer_email.as_deref(), Some("payer@example.com"));
    }

    #[tokio::test]
    async fn settle_flips_session_to_paid() {
        let gateway = MockGateway::new();
        let session = gateway.create_session(&request()).await.unwrap();
        gateway.settle(&session.id);

        let details = gateway.retrieve_session(&session.id).await.unwrap();
        assert!(details.is_paid());
        assert!(details.payment_id.is_some());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let gateway = MockGateway::new();
        let err = gateway.retrieve_session("cs_missing").await.unwrap_err();
        assert!(matches!(err, GatewayError::SessionNotFound(_)));
    }
}
