//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! All secrets are loaded from environment variables.

use checkout_core::CheckoutError;
use std::env;

/// Locale for the hosted checkout page (Latin American Spanish)
pub const CHECKOUT_LOCALE: &str = "es-419";

/// Currency used when `CHECKOUT_CURRENCY` is not set
pub const DEFAULT_CURRENCY: &str = "mxn";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,

    /// ISO 4217 currency code for all line items
    pub currency: String,

    /// Locale for the hosted page
    pub locale: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional env vars:
    /// - `CHECKOUT_CURRENCY` (default: "mxn")
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            CheckoutError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        if !secret_key.starts_with("sk_test_") && !secret_key.starts_with("sk_live_") {
            return Err(CheckoutError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_ or sk_live_".to_string(),
            ));
        }

        let currency = env::var("CHECKOUT_CURRENCY")
            .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string())
            .to_lowercase();

        Ok(Self {
            secret_key,
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
            currency,
            locale: CHECKOUT_LOCALE.to_string(),
        })
    }

    /// Create config with an explicit secret key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            locale: CHECKOUT_LOCALE.to_string(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set the line-item currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_modes() {
        let config = StripeConfig::new("sk_test_abc123");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = StripeConfig::new("sk_live_abc123");
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_defaults() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.currency, "mxn");
        assert_eq!(config.locale, "es-419");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
    }

    #[test]
    fn test_builders() {
        let config = StripeConfig::new("sk_test_abc123")
            .with_api_base_url("http://127.0.0.1:9000")
            .with_currency("usd");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.currency, "usd");
    }
}
