//! # Session Bridge
//!
//! HTTP boundary for the checkout-session bridge.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export STRIPE_API_BASE=https://api.stripe.com
//! export STRIPE_TIMEOUT_SECS=30
//! export PORT=8080
//!
//! session-bridge
//! ```

use session_api::{routes, state::AppState};
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

    let state = AppState::new();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    let app = routes::create_router(state);

    info!("Session bridge starting on http://{}", addr);
    if !is_prod {
        info!("Checkout: POST http://{}/api/v1/sessions", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
