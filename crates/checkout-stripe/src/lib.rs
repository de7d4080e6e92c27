//! # checkout-stripe
//!
//! Stripe Checkout Sessions client for cart-checkout-rs.
//!
//! Talks to the raw form-encoded `/v1/checkout/sessions` REST API; no Stripe
//! SDK. The customer is redirected to Stripe's hosted payment page, which
//! keeps card data off this service entirely.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_stripe::StripeCheckoutClient;
//! use checkout_core::{RedirectUrls, SessionProvider};
//!
//! // Create client from environment (STRIPE_SECRET_KEY)
//! let client = StripeCheckoutClient::from_env()?;
//!
//! let urls = RedirectUrls::build(Some("https://shop.example"), None)?;
//! let session = client.create_session(&line_items, &urls).await?;
//!
//! // Redirect user to session.url
//! ```

pub mod config;
pub mod session;

// Re-exports
pub use config::StripeConfig;
pub use session::StripeCheckoutClient;
