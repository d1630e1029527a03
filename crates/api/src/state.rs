use std::sync::Arc;

use learnhub_payments::CheckoutGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: learnhub_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Checkout gateway. The production binary wires a `StripeGateway`;
    /// tests inject a `MockGateway`.
    pub gateway: Arc<dyn CheckoutGateway>,
}
