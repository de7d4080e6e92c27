//! # Session Provider Trait
//!
//! Seam between the HTTP layer and the payment provider. The API crate only
//! sees this trait; tests run against a fake implementation and production
//! wires in the Stripe client.

use crate::cart::{CheckoutSession, LineItem};
use crate::error::CheckoutResult;
use crate::redirect::RedirectUrls;
use async_trait::async_trait;
use std::sync::Arc;

/// Payment provider capable of creating hosted checkout sessions.
///
/// One call per checkout request; no retry is performed on failure, a single
/// failed attempt surfaces to the caller.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Create a hosted checkout session and return its redirect URL.
    ///
    /// # Arguments
    /// * `line_items` - The priced entries to charge for (non-empty)
    /// * `urls` - Validated success/cancel redirect URLs
    async fn create_session(
        &self,
        line_items: &[LineItem],
        urls: &RedirectUrls,
    ) -> CheckoutResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared session provider (dynamic dispatch)
pub type BoxedSessionProvider = Arc<dyn SessionProvider>;
