//! # Stripe Configuration
//!
//! Endpoint and timeout configuration for the Stripe transport.
//!
//! Note the secret key is NOT part of this config: it is caller data that
//! arrives with each session request and is scoped to that request.

use std::env;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stripe API endpoint configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,

    /// Pinned API version sent on every request
    pub api_version: String,

    /// Per-step request timeout; a stalled provider call must not hang a
    /// chain indefinitely
    pub timeout: Duration,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `STRIPE_API_BASE` (default `https://api.stripe.com`)
    /// - `STRIPE_API_VERSION`
    /// - `STRIPE_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url =
            env::var("STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_version =
            env::var("STRIPE_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let timeout_secs = env::var("STRIPE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_base_url,
            api_version,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set per-step timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StripeConfig::default();
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builders() {
        let config = StripeConfig::default()
            .with_api_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
