use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL the checkout flow redirects back to.
    pub frontend_url: String,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Checkout-gateway configuration.
    pub stripe: StripeConfig,
}

/// Stripe client configuration.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (`sk_...`).
    pub secret_key: String,
}

impl StripeConfig {
    /// # Panics
    ///
    /// Panics if `STRIPE_SECRET_KEY` is not set.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .expect("STRIPE_SECRET_KEY must be set in the environment");
        Self { secret_key }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FRONTEND_URL`         | `http://localhost:5173`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .trim_end_matches('/')
            .to_string();

        let jwt = JwtConfig::from_env();
        let stripe = StripeConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            frontend_url,
            jwt,
            stripe,
        }
    }
}
