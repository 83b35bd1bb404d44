//! # Session Error Types
//!
//! Typed error handling for the session-creation workflow.
//! All orchestration operations return `Result<T, SessionError>`.

use crate::transport::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Error reported by the payment provider, normalized from the
/// heterogeneous failure shapes the provider can produce
/// (an `{error: {message}}` envelope, a bare non-JSON body, or a
/// success-shaped body missing the expected field).
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// Human-readable message. The provider's `error.message` verbatim
    /// when present, otherwise a step-specific fallback.
    pub message: String,

    /// The raw response body, when it parsed as JSON.
    pub raw: Option<Value>,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Core error type for session creation.
///
/// Step failures surface the provider message verbatim: the caller always
/// receives a single descriptive string, never a nested error chain.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required request field is empty or absent (client-side, rejected
    /// before any network call)
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A request field is present but invalid (client-side)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The `/products` step failed
    #[error("{}", .0.message)]
    ProductCreationFailed(ProviderError),

    /// The `/prices` step failed
    #[error("{}", .0.message)]
    PriceCreationFailed(ProviderError),

    /// The `/checkout/sessions` step failed
    #[error("{}", .0.message)]
    SessionCreationFailed(ProviderError),

    /// No usable HTTP response was obtained (network error, timeout,
    /// or an unparseable success body)
    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

impl SessionError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SessionError::MissingField(_) => 400,
            SessionError::InvalidRequest(_) => 400,
            SessionError::ProductCreationFailed(_) => 502,
            SessionError::PriceCreationFailed(_) => 502,
            SessionError::SessionCreationFailed(_) => 502,
            SessionError::TransportFailure(_) => 503,
        }
    }
}

/// Result type alias for session-creation operations
pub type SessionResult<T> = Result<T, SessionError>;

/// The three dependent calls of the session-creation chain.
///
/// Each step knows its fallback message and which `SessionError` variant
/// its failures map to, so the orchestrator can normalize uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Product,
    Price,
    CheckoutSession,
}

impl Step {
    /// Generic message used when the provider did not supply one
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Step::Product => "Failed to create product",
            Step::Price => "Failed to create price",
            Step::CheckoutSession => "Failed to create checkout session",
        }
    }

    /// Wrap a normalized provider error in this step's variant
    pub fn failure(&self, error: ProviderError) -> SessionError {
        match self {
            Step::Product => SessionError::ProductCreationFailed(error),
            Step::Price => SessionError::PriceCreationFailed(error),
            Step::CheckoutSession => SessionError::SessionCreationFailed(error),
        }
    }

    /// Normalize a transport-layer failure into a `SessionError`.
    ///
    /// Precedence: a non-2xx body containing `error.message` surfaces that
    /// string verbatim; any other non-2xx body gets the step fallback.
    /// Failures with no HTTP response at all become `TransportFailure`.
    pub fn from_transport(&self, err: TransportError) -> SessionError {
        match err {
            TransportError::Network(message) => SessionError::TransportFailure(message),
            TransportError::InvalidBody { status, reason } => SessionError::TransportFailure(
                format!("HTTP {status} response was not valid JSON: {reason}"),
            ),
            TransportError::Status { body, .. } => {
                let raw = serde_json::from_str::<Value>(&body).ok();
                let message = raw
                    .as_ref()
                    .and_then(|v| v.get("error"))
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or_else(|| self.fallback_message().to_string());
                self.failure(ProviderError { message, raw })
            }
        }
    }

    /// Error for a 2xx response that lacks the identifier this step expects
    pub fn missing_identifier(&self, raw: Value) -> SessionError {
        self.failure(ProviderError {
            message: self.fallback_message().to_string(),
            raw: Some(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(SessionError::MissingField("currency").status_code(), 400);
        assert_eq!(
            SessionError::TransportFailure("timeout".into()).status_code(),
            503
        );
        assert_eq!(
            Step::Price
                .failure(ProviderError {
                    message: "bad".into(),
                    raw: None
                })
                .status_code(),
            502
        );
    }

    #[test]
    fn test_provider_message_surfaced_verbatim() {
        let err = Step::Price.from_transport(TransportError::Status {
            status: 400,
            body: r#"{"error":{"message":"Invalid currency"}}"#.to_string(),
        });

        assert!(matches!(err, SessionError::PriceCreationFailed(_)));
        assert_eq!(err.to_string(), "Invalid currency");
    }

    #[test]
    fn test_non_json_error_body_uses_fallback() {
        let err = Step::Product.from_transport(TransportError::Status {
            status: 500,
            body: "upstream exploded".to_string(),
        });

        assert_eq!(err.to_string(), "Failed to create product");
        match err {
            SessionError::ProductCreationFailed(provider) => assert!(provider.raw.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_envelope_without_message_uses_fallback() {
        let err = Step::CheckoutSession.from_transport(TransportError::Status {
            status: 402,
            body: r#"{"error":{"code":"card_declined"}}"#.to_string(),
        });

        assert_eq!(err.to_string(), "Failed to create checkout session");
    }

    #[test]
    fn test_network_error_is_transport_failure() {
        let err = Step::Product.from_transport(TransportError::Network("connection reset".into()));
        assert!(matches!(err, SessionError::TransportFailure(_)));
        assert_eq!(err.to_string(), "Transport failure: connection reset");
    }

    #[test]
    fn test_missing_identifier_keeps_raw_body() {
        let body = json!({"object": "price", "active": true});
        let err = Step::Price.missing_identifier(body.clone());

        assert_eq!(err.to_string(), "Failed to create price");
        match err {
            SessionError::PriceCreationFailed(provider) => {
                assert_eq!(provider.raw, Some(body));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
