//! # Request Handlers
//!
//! Axum request handlers for the checkout endpoint. The pipeline is strictly
//! linear: normalize body, validate cart, resolve redirect URLs, call the
//! provider, respond. Exactly one status/body pair per invocation.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use checkout_core::{CheckoutError, CheckoutRequest, RedirectUrls};
use serde::Serialize;
use tracing::{error, info, instrument};

// =============================================================================
// Response Types
// =============================================================================

/// Successful checkout response: where to send the browser
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Redirect URL to the provider's hosted payment page
    pub url: String,
}

/// Error response. The diagnostic URL fields are only populated for
/// redirect-URL validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            origin: None,
            success_url: None,
            cancel_url: None,
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut body = ErrorResponse::new(err.to_string());
    if let CheckoutError::BadRedirectUrl {
        origin,
        success_url,
        cancel_url,
    } = err
    {
        body.origin = Some(origin);
        body.success_url = Some(success_url);
        body.cancel_url = Some(cancel_url);
    }

    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cart-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 405 for any non-POST, non-OPTIONS method on the checkout route.
/// OPTIONS never reaches this: the CORS layer answers preflights itself.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

/// Create a hosted checkout session from a cart payload
#[instrument(skip(state, headers, body))]
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Accept structured JSON, a JSON-encoded string, or no body at all.
    // Anything unparseable degrades to an empty object, which fails cart
    // validation below rather than erroring on its own.
    let value = normalize_body(&body);
    let request: CheckoutRequest = serde_json::from_value(value).unwrap_or_default();

    if request.is_empty() {
        return Err(checkout_error_to_response(CheckoutError::CartEmpty));
    }

    let request_origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());

    let urls = RedirectUrls::build(state.config.domain.as_deref(), request_origin)
        .map_err(checkout_error_to_response)?;

    let line_items = request.line_items();

    info!(
        "Creating checkout: {} items, provider={}, success_url={}",
        line_items.len(),
        state.provider.provider_name(),
        urls.success_url
    );

    let session = state
        .provider
        .create_session(&line_items, &urls)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            checkout_error_to_response(e)
        })?;

    info!("Created checkout session: {}", session.id);

    Ok(Json(CheckoutResponse { url: session.url }))
}

/// Normalize the raw request body to a JSON object.
///
/// - empty body -> `{}`
/// - JSON string body -> parse the inner string as JSON (failure -> `{}`)
/// - JSON object -> as-is
/// - anything else (arrays, numbers, garbage) -> `{}`
fn normalize_body(body: &[u8]) -> serde_json::Value {
    let empty = || serde_json::Value::Object(serde_json::Map::new());

    if body.is_empty() {
        return empty();
    }

    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(inner)) => {
            serde_json::from_str(&inner).unwrap_or_else(|_| empty())
        }
        Ok(value @ serde_json::Value::Object(_)) => value,
        _ => empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_body_empty() {
        assert_eq!(normalize_body(b""), json!({}));
    }

    #[test]
    fn test_normalize_body_object() {
        let body = br#"{"cart":[{"name":"X","price":5,"qty":1}]}"#;
        assert_eq!(
            normalize_body(body),
            json!({"cart": [{"name": "X", "price": 5, "qty": 1}]})
        );
    }

    #[test]
    fn test_normalize_body_json_string() {
        // The whole body is one JSON string whose content is JSON
        let inner = json!({"cart": [{"name": "X", "price": 5, "qty": 1}]}).to_string();
        let body = serde_json::Value::String(inner.clone()).to_string();

        assert_eq!(normalize_body(body.as_bytes()), json!({"cart": [{"name": "X", "price": 5, "qty": 1}]}));
    }

    #[test]
    fn test_normalize_body_garbage() {
        assert_eq!(normalize_body(b"not json at all"), json!({}));
        assert_eq!(normalize_body(b"\"also { not json\""), json!({}));
        assert_eq!(normalize_body(b"[1,2,3]"), json!({}));
        assert_eq!(normalize_body(b"42"), json!({}));
    }

    #[test]
    fn test_error_response_shape() {
        let (status, Json(body)) = checkout_error_to_response(CheckoutError::CartEmpty);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Cart empty");
        assert!(body.origin.is_none());

        let (status, Json(body)) = checkout_error_to_response(CheckoutError::BadRedirectUrl {
            origin: "".to_string(),
            success_url: "/success.html?session_id={CHECKOUT_SESSION_ID}".to_string(),
            cancel_url: "/".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Bad URL");
        assert_eq!(body.origin.as_deref(), Some(""));
        assert_eq!(
            body.success_url.as_deref(),
            Some("/success.html?session_id={CHECKOUT_SESSION_ID}")
        );
        assert_eq!(body.cancel_url.as_deref(), Some("/"));
    }

    #[test]
    fn test_provider_error_is_500() {
        let (status, Json(body)) = checkout_error_to_response(CheckoutError::Provider {
            provider: "stripe".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("boom"));
    }
}
