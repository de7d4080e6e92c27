//! # checkout-api
//!
//! HTTP API layer for cart-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The cart-to-checkout endpoint
//! - Allowlist-based CORS with preflight handling
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |---------|-------------|--------------------------------------|
//! | GET | `/health` | Health check |
//! | POST | `/checkout` | Create a hosted checkout session |
//! | OPTIONS | `/checkout` | CORS preflight (answered by the layer) |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
