//! # Cart-Checkout RS
//!
//! Cart-to-hosted-checkout endpoint backed by Stripe Checkout Sessions.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export DOMAIN=https://shop.example          # optional redirect base
//! export ALLOWED_ORIGINS=https://shop.example # optional CORS allowlist
//!
//! # Run the server
//! cart-checkout
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());
    if state.config.cors_is_permissive() {
        info!("CORS: permissive (no allowlist configured)");
    } else {
        info!("CORS allowlist: {:?}", state.config.allowed_origins);
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Cart-Checkout starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/checkout", addr);
        info!("Health:   GET  http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
