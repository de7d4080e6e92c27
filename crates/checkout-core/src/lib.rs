//! # checkout-core
//!
//! Core types and traits for the cart-checkout endpoint.
//!
//! This crate provides:
//! - `CartItem`, `CheckoutRequest`, and `LineItem` for the cart payload
//! - `RedirectUrls` for success/cancel URL resolution and validation
//! - `SessionProvider` trait for payment provider implementations
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutRequest, LineItem, RedirectUrls};
//!
//! // Validate the cart payload
//! let request: CheckoutRequest = serde_json::from_value(body)?;
//!
//! // Resolve redirect URLs from config + request origin
//! let urls = RedirectUrls::build(config.domain.as_deref(), request_origin)?;
//!
//! // Build provider line items
//! let items: Vec<LineItem> = request.cart.iter().map(LineItem::from_cart_item).collect();
//!
//! // Create the hosted session and redirect the user to session.url
//! let session = provider.create_session(&items, &urls).await?;
//! ```

pub mod cart;
pub mod error;
pub mod provider;
pub mod redirect;

// Re-exports for convenience
pub use cart::{CartItem, CheckoutRequest, CheckoutSession, LineItem};
pub use error::{CheckoutError, CheckoutResult};
pub use provider::{BoxedSessionProvider, SessionProvider};
pub use redirect::RedirectUrls;
