//! # Routes
//!
//! Axum router and CORS configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /checkout - Create a hosted checkout session
/// - OPTIONS /checkout - Preflight, answered by the CORS layer with 200
/// - any other method on /checkout - 405
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/checkout",
            post(handlers::create_checkout).fallback(handlers::method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured allowlist.
///
/// Empty allowlist or a `*` entry means permissive: the request origin is
/// mirrored back. Otherwise only the listed origins are allowed. For a given
/// configuration + request origin pair the outcome is deterministic. The
/// layer answers OPTIONS preflights itself (status 200, empty body) and
/// appends `Vary: Origin`.
fn cors_layer(config: &crate::state::AppConfig) -> CorsLayer {
    let allow_origin = if config.cors_is_permissive() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin
                    .parse()
                    .map_err(|e| {
                        tracing::warn!("Skipping invalid CORS origin '{}': {}", origin, e);
                        e
                    })
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
