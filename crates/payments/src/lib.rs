//! Checkout-gateway abstraction and its Stripe implementation.
//!
//! The rest of the system talks to [`CheckoutGateway`] only; the concrete
//! gateway is injected at startup. [`MockGateway`] backs the integration
//! tests so no network calls happen there.

mod error;
mod gateway;
mod mock;
mod stripe;

pub use error::GatewayError;
pub use gateway::{CheckoutGateway, CheckoutSession, CreateSessionRequest, SessionDetails};
pub use mock::MockGateway;
pub use stripe::StripeGateway;
