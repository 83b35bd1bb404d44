//! # Stripe HTTP Transport
//!
//! `reqwest`-backed implementation of the core `Transport` trait: issues
//! authenticated, form-encoded requests against `<base>/v1<path>` and hands
//! back parsed JSON or a structured transport error for the orchestrator
//! to normalize.

use crate::config::StripeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use session_core::{Method, Transport, TransportError};
use tracing::{debug, error, instrument};

/// HTTP transport over the Stripe REST API
pub struct HttpTransport {
    config: StripeConfig,
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given endpoint configuration
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(StripeConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.config.api_base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, form, bearer_token), fields(method = %method, path = %path))]
    async fn send(
        &self,
        method: Method,
        path: &str,
        form: &[(String, String)],
        bearer_token: &str,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);

        let builder = match method {
            Method::Post => self.client.post(&url).form(&form),
            Method::Get => self.client.get(&url).query(&form),
        };

        let response = builder
            .header("Authorization", format!("Bearer {bearer_token}"))
            .header("Stripe-Version", &self.config.api_version)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Stripe API success: status={}", status);

        serde_json::from_str(&body).map_err(|e| TransportError::InvalidBody {
            status: status.as_u16(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use session_core::{BoxedTransport, SessionOrchestrator, SessionRequest};
    use std::sync::Arc;
    use wiremock::matchers::{body_string_contains, header, method as http_method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        HttpTransport::new(StripeConfig::default().with_api_base_url(server.uri()))
    }

    #[tokio::test]
    async fn test_sends_bearer_auth_and_form_body() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/products"))
            .and(header("Authorization", "Bearer sk_test_abc"))
            .and(header(
                "Content-Type",
                "application/x-www-form-urlencoded",
            ))
            .and(body_string_contains("name=PayProduct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "prod_1"})))
            .expect(1)
            .mount(&server)
            .await;

        let form = vec![("name".to_string(), "PayProduct".to_string())];
        let response = transport_for(&server)
            .send(Method::Post, "/products", &form, "sk_test_abc")
            .await
            .unwrap();

        assert_eq!(response["id"], "prod_1");
    }

    #[tokio::test]
    async fn test_form_values_are_percent_encoded() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(body_string_contains(
                "success_url=https%3A%2F%2Fx%2Fok%3Fa%3D1",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "https://checkout/abc"})),
            )
            .mount(&server)
            .await;

        let form = vec![("success_url".to_string(), "https://x/ok?a=1".to_string())];
        let response = transport_for(&server)
            .send(Method::Post, "/checkout/sessions", &form, "sk_test_abc")
            .await
            .unwrap();

        assert_eq!(response["url"], "https://checkout/abc");
    }

    #[tokio::test]
    async fn test_non_2xx_returns_status_error_with_raw_body() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/prices"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": {"message": "Invalid currency"}})),
            )
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .send(Method::Post, "/prices", &[], "sk_test_abc")
            .await
            .unwrap_err();

        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Invalid currency"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_2xx_non_json_body_is_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .send(Method::Post, "/products", &[], "sk_test_abc")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidBody { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Nothing listens on this port
        let transport = HttpTransport::new(
            StripeConfig::default().with_api_base_url("http://127.0.0.1:9"),
        );

        let err = transport
            .send(Method::Post, "/products", &[], "sk_test_abc")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Network(_)));
    }

    #[tokio::test]
    async fn test_full_adhoc_chain_against_mock_provider() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "prod_1"})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(http_method("POST"))
            .and(path("/v1/prices"))
            .and(body_string_contains("product=prod_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "price_1"})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(http_method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(body_string_contains("line_items%5B0%5D%5Bprice%5D=price_1"))
            .and(body_string_contains("mode=payment"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "cs_1", "url": "https://checkout/abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport: BoxedTransport = Arc::new(transport_for(&server));
        let orchestrator = SessionOrchestrator::new(transport);
        let request = SessionRequest::payment("sk_test_abc", "usd", 500, "https://x/ok");

        let outcome = orchestrator.create_payment_session(&request).await;

        assert!(outcome.ok, "failed: {}", outcome.message);
        assert_eq!(outcome.redirect_url.as_deref(), Some("https://checkout/abc"));
    }

    #[tokio::test]
    async fn test_chain_halts_on_price_failure_against_mock_provider() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "prod_1"})))
            .mount(&server)
            .await;

        Mock::given(http_method("POST"))
            .and(path("/v1/prices"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": {"message": "Invalid currency"}})),
            )
            .mount(&server)
            .await;

        // The session endpoint must never be reached
        Mock::given(http_method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "nope"})))
            .expect(0)
            .mount(&server)
            .await;

        let transport: BoxedTransport = Arc::new(transport_for(&server));
        let orchestrator = SessionOrchestrator::new(transport);
        let request = SessionRequest::payment("sk_test_abc", "zzz", 500, "https://x/ok");

        let outcome = orchestrator.create_payment_session(&request).await;

        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Invalid currency");
    }

    #[tokio::test]
    async fn test_subscription_chain_against_mock_provider() {
        let server = MockServer::start().await;

        Mock::given(http_method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(body_string_contains("mode=subscription"))
            .and(body_string_contains("customer=cus_1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "https://checkout/sub"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport: BoxedTransport = Arc::new(transport_for(&server));
        let orchestrator = SessionOrchestrator::new(transport);
        let request = SessionRequest::subscription("sk_test_abc", "price_99", "https://x/ok")
            .with_customer("cus_1");

        let outcome = orchestrator.create_payment_session(&request).await;

        assert!(outcome.ok, "failed: {}", outcome.message);
        assert_eq!(outcome.redirect_url.as_deref(), Some("https://checkout/sub"));
    }
}
