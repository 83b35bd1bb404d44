//! # Transport Trait
//!
//! Platform-neutral boundary between the session orchestrator and whatever
//! actually moves bytes to the payment provider. The orchestrator only
//! needs one capability: send an authenticated form-encoded request and get
//! back parsed JSON or a structured failure.
//!
//! Production uses the `reqwest`-backed implementation in `session-stripe`;
//! tests use scripted in-memory transports.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// HTTP method, restricted to what the provider API needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure reported by a transport implementation
#[derive(Debug, Error)]
pub enum TransportError {
    /// No HTTP response was obtained (connect error, timeout, cancellation)
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not valid JSON
    #[error("Invalid response body (HTTP {status}): {reason}")]
    InvalidBody { status: u16, reason: String },

    /// A non-2xx response, with the raw body for error extraction
    #[error("HTTP {status} from provider")]
    Status { status: u16, body: String },
}

/// One authenticated exchange with the provider API.
///
/// Implementations are responsible for form/percent encoding the body,
/// attaching `Authorization: Bearer <token>`, and enforcing the per-step
/// timeout. They must not retry: the orchestrator's fail-fast semantics
/// depend on each call happening at most once.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        form: &[(String, String)],
        bearer_token: &str,
    ) -> Result<Value, TransportError>;
}

/// Type alias for a shared transport (dynamic dispatch)
pub type BoxedTransport = Arc<dyn Transport>;
