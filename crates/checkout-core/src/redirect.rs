//! # Redirect URLs
//!
//! Resolution and validation of the success/cancel redirect URLs sent to the
//! payment provider. The provider substitutes `{CHECKOUT_SESSION_ID}` in the
//! success URL at redemption time, so the placeholder must appear verbatim.

use crate::error::CheckoutError;
use url::Url;

/// Fallback origin when neither `DOMAIN` nor the request's `Origin` header
/// is available (local static-page development).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5500";

/// Literal token Stripe replaces with the session ID on redirect
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Validated success/cancel URLs for one checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    /// Normalized base origin the URLs were built from
    pub origin: String,

    /// Where the provider sends the browser after payment
    pub success_url: String,

    /// Where the provider sends the browser on cancellation
    pub cancel_url: String,
}

impl RedirectUrls {
    /// Build and validate redirect URLs.
    ///
    /// Origin priority: configured domain, then the request's `Origin`
    /// header, then [`DEFAULT_ORIGIN`]. A configured domain wins even when
    /// blank so that a misconfiguration surfaces as `BadRedirectUrl` instead
    /// of silently falling back.
    ///
    /// Both URLs must parse as absolute URLs; on failure the attempted
    /// values are returned verbatim in the error.
    pub fn build(
        configured_domain: Option<&str>,
        request_origin: Option<&str>,
    ) -> Result<Self, CheckoutError> {
        let origin = resolve_origin(configured_domain, request_origin);

        let success_url = format!("{}/success.html?session_id={}", origin, SESSION_ID_PLACEHOLDER);
        let cancel_url = format!("{}/", origin);

        if Url::parse(&success_url).is_err() || Url::parse(&cancel_url).is_err() {
            return Err(CheckoutError::BadRedirectUrl {
                origin,
                success_url,
                cancel_url,
            });
        }

        Ok(Self {
            origin,
            success_url,
            cancel_url,
        })
    }
}

/// Resolve and normalize the base redirect origin: trim whitespace, strip a
/// single trailing slash, and rewrite a loopback literal to its hostname
/// alias (Stripe rejects `127.0.0.1` in non-HTTPS redirect URLs).
fn resolve_origin(configured_domain: Option<&str>, request_origin: Option<&str>) -> String {
    let raw = configured_domain
        .or(request_origin)
        .unwrap_or(DEFAULT_ORIGIN);

    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    trimmed.replacen("://127.0.0.1", "://localhost", 1)
}
