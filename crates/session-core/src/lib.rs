//! # session-core
//!
//! Core of the checkout-session bridge: one platform-neutral engine that
//! turns a caller's session request into a chain of dependent provider API
//! calls and hands back a redirect URL or a single error message.
//!
//! This crate provides:
//! - `SessionOrchestrator` for the product → price → checkout-session chain
//! - `SessionRequest` / `SessionOutcome` request-scoped value objects
//! - `Transport` trait, the seam every platform binding plugs into
//! - `SessionError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use session_core::{SessionOrchestrator, SessionRequest};
//!
//! let orchestrator = SessionOrchestrator::new(transport);
//!
//! // Ad-hoc one-time payment: $5.00
//! let request = SessionRequest::payment(secret_key, "usd", 500, "https://x/ok")
//!     .with_cancel_url("https://x/cancel");
//!
//! let outcome = orchestrator.create_payment_session(&request).await;
//! if outcome.ok {
//!     // Redirect user to outcome.redirect_url
//! }
//! ```

pub mod error;
pub mod orchestrator;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use error::{ProviderError, SessionError, SessionResult, Step};
pub use orchestrator::{SessionOrchestrator, ADHOC_PRODUCT_NAME};
pub use request::{CheckoutMode, SessionOutcome, SessionRequest};
pub use transport::{BoxedTransport, Method, Transport, TransportError};
