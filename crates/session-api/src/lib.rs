//! # session-api
//!
//! HTTP boundary adapter for the checkout-session bridge.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The caller-facing `createPaymentSession` operation as a REST endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/sessions` | Create a checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
