//! # Checkout Error Types
//!
//! Typed error handling for the cart-checkout pipeline.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cart is missing, not a sequence, or has no items
    #[error("Cart empty")]
    CartEmpty,

    /// Redirect URLs failed absolute-URL validation.
    /// Carries the attempted values verbatim for the error response.
    #[error("Bad URL")]
    BadRedirectUrl {
        origin: String,
        success_url: String,
        cancel_url: String,
    },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Client input errors map to 400; everything that goes wrong past
    /// validation (provider rejection, network failure) surfaces as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::CartEmpty => 400,
            CheckoutError::BadRedirectUrl { .. } => 400,
            CheckoutError::Configuration(_) => 500,
            CheckoutError::Provider { .. } => 500,
            CheckoutError::Network(_) => 500,
            CheckoutError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CheckoutError::CartEmpty.status_code(), 400);
        assert_eq!(
            CheckoutError::BadRedirectUrl {
                origin: "".into(),
                success_url: "/success.html".into(),
                cancel_url: "/".into(),
            }
            .status_code(),
            400
        );
        assert_eq!(
            CheckoutError::Network("timeout".into()).status_code(),
            500
        );
        assert_eq!(
            CheckoutError::Provider {
                provider: "stripe".into(),
                message: "invalid currency".into(),
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_client_error_messages() {
        // These strings are part of the HTTP contract.
        assert_eq!(CheckoutError::CartEmpty.to_string(), "Cart empty");
        assert_eq!(
            CheckoutError::BadRedirectUrl {
                origin: "".into(),
                success_url: "".into(),
                cancel_url: "".into(),
            }
            .to_string(),
            "Bad URL"
        );
    }
}
