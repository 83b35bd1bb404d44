//! # Application State
//!
//! Shared state for the Axum application: the session orchestrator and
//! server configuration.

use session_core::SessionOrchestrator;
use session_stripe::{HttpTransport, StripeConfig};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session-creation engine over the Stripe transport
    pub orchestrator: SessionOrchestrator,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState wired to the live Stripe API
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let transport = HttpTransport::new(StripeConfig::from_env());

        Self {
            orchestrator: SessionOrchestrator::new(Arc::new(transport)),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
