//! # Application State
//!
//! Shared state for the Axum application. Configuration is read once at
//! startup and passed into handlers; request logic never touches the
//! environment.

use checkout_core::BoxedSessionProvider;
use checkout_stripe::StripeCheckoutClient;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Optional override for the redirect base origin.
    /// When unset, the request's Origin header is used instead.
    pub domain: Option<String>,
    /// CORS allowlist; empty means permissive (reflect the request origin)
    pub allowed_origins: Vec<String>,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            domain: std::env::var("DOMAIN").ok(),
            allowed_origins: parse_allowed_origins(
                &std::env::var("ALLOWED_ORIGINS").unwrap_or_default(),
            ),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Permissive CORS: no allowlist configured, or a wildcard entry
    pub fn cors_is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse the comma-separated `ALLOWED_ORIGINS` value
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: Arc<AppConfig>,
    /// Payment session provider
    pub provider: BoxedSessionProvider,
}

impl AppState {
    /// Create a new AppState wired to the Stripe client
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let stripe = StripeCheckoutClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self {
            config: Arc::new(config),
            provider: Arc::new(stripe),
        })
    }

    /// Create an AppState with an injected provider (for tests)
    pub fn with_provider(config: AppConfig, provider: BoxedSessionProvider) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
