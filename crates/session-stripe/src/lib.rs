//! # session-stripe
//!
//! Stripe transport for the checkout-session bridge.
//!
//! This crate provides:
//! - `StripeConfig` - endpoint, API version, and per-step timeout
//! - `HttpTransport` - `reqwest`-backed implementation of the core
//!   `Transport` trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use session_core::{SessionOrchestrator, SessionRequest};
//! use session_stripe::HttpTransport;
//! use std::sync::Arc;
//!
//! let orchestrator = SessionOrchestrator::new(Arc::new(HttpTransport::from_env()));
//!
//! let request = SessionRequest::payment(secret_key, "usd", 500, "https://x/ok");
//! let outcome = orchestrator.create_payment_session(&request).await;
//! ```

pub mod config;
pub mod http;

// Re-exports
pub use config::StripeConfig;
pub use http::HttpTransport;
