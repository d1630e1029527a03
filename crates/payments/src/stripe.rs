//! Stripe Checkout client over the plain REST API.

use serde::Deserialize;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::gateway::{CheckoutGateway, CheckoutSession, CreateSessionRequest, SessionDetails};

const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Stripe-backed [`CheckoutGateway`].
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    url: Option<String>,
    payment_status: Option<String>,
    amount_total: Option<i64>,
    currency: Option<String>,
    payment_intent: Option<String>,
    customer_email: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    kind: String,
}

impl StripeGateway {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API host (test doubles).
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }

    async fn parse_session(&self, response: reqwest::Response) -> Result<StripeSession, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<StripeSession>().await?);
        }

        let message = match response.json::<StripeErrorBody>().await {
            Ok(body) => {
                tracing::warn!(kind = %body.error.kind, "stripe API error");
                body.error.message
            }
            Err(_) => "unreadable error body".to_string(),
        };
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::SessionNotFound(message));
        }
        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CheckoutGateway for StripeGateway {
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let amount = request.amount_cents.to_string();
        let user_id = request.user_id.to_string();
        let course_id = request.course_id.to_string();

        // Stripe's REST surface is form-encoded with bracketed nesting.
        let form: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("line_items[0][quantity]", "1"),
            ("line_items[0][price_data][currency]", &request.currency),
            ("line_items[0][price_data][unit_amount]", &amount),
            (
                "line_items[0][price_data][product_data][name]",
                &request.course_title,
            ),
            ("customer_email", &request.customer_email),
            ("metadata[user_id]", &user_id),
            ("metadata[course_id]", &course_id),
            ("success_url", &request.success_url),
            ("cancel_url", &request.cancel_url),
        ];

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let session = self.parse_session(response).await?;
        let url = session
            .url
            .ok_or(GatewayError::MalformedResponse("url"))?;
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<SessionDetails, GatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/checkout/sessions/{}",
                self.api_base, session_id
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let session = self.parse_session(response).await?;
        let payment_status = session
            .payment_status
            .ok_or(GatewayError::MalformedResponse("payment_status"))?;

        let user_id = session
            .metadata
            .get("user_id")
            .and_then(|v| v.parse().ok());
        let course_id = session
            .metadata
            .get("course_id")
            .and_then(|v| v.parse().ok());

        Ok(SessionDetails {
            id: session.id,
            payment_status,
            amount_cents: session.amount_total,
            currency: session.currency,
            payment_id: session.payment_intent,
            customer_email: session.customer_email,
            user_id,
            course_id,
        })
    }
}
