//! # Session Orchestrator
//!
//! Drives the strictly ordered chain of dependent provider calls that
//! creates one checkout session:
//!
//! ```text
//! Start → Validate ─fail→ Terminal(Error)
//!            │pass
//!            ▼
//!   [ POST /products → POST /prices ]   (ad-hoc payment only)
//!            ▼
//!     POST /checkout/sessions ─fail→ Terminal(Error)
//!            │
//!            ▼
//!     Terminal(redirect URL)
//! ```
//!
//! Each step's output identifier feeds the next step; any failure halts the
//! chain immediately. No retries: a retried step could silently create a
//! duplicate checkout session.

use crate::error::{SessionError, SessionResult, Step};
use crate::request::{CheckoutMode, SessionOutcome, SessionRequest};
use crate::transport::{BoxedTransport, Method};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Display name for the throwaway product synthesized on the ad-hoc
/// payment path
pub const ADHOC_PRODUCT_NAME: &str = "PayProduct";

/// The session-creation engine, shared by every caller-facing binding.
///
/// Holds only a transport; all other state is request-scoped, so concurrent
/// invocations need no synchronization.
#[derive(Clone)]
pub struct SessionOrchestrator {
    transport: BoxedTransport,
}

impl SessionOrchestrator {
    /// Create an orchestrator over the given transport
    pub fn new(transport: BoxedTransport) -> Self {
        Self { transport }
    }

    /// Create a checkout session and report the terminal outcome.
    ///
    /// The caller always receives either a redirect URL or a single
    /// descriptive message, never both and never neither.
    #[instrument(skip(self, request), fields(mode = request.mode.as_str()))]
    pub async fn create_payment_session(&self, request: &SessionRequest) -> SessionOutcome {
        match self.run(request).await {
            Ok(url) => {
                info!("Created checkout session: url={}", url);
                SessionOutcome::success(url)
            }
            Err(err) => {
                warn!("Session creation failed: {}", err);
                SessionOutcome::failure(err.to_string())
            }
        }
    }

    /// Run the chain, returning the redirect URL or the halting error.
    ///
    /// Exposed separately so boundary adapters can map errors onto their
    /// own status codes.
    pub async fn run(&self, request: &SessionRequest) -> SessionResult<String> {
        request.validate()?;

        // A caller-supplied price skips product/price creation entirely;
        // validation guarantees subscriptions always carry one.
        let price_id = match &request.price_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => {
                let product_id = self.create_product(request).await?;
                self.create_price(request, &product_id).await?
            }
        };

        self.create_checkout_session(request, &price_id).await
    }

    /// `POST /products`: synthesize the throwaway product (ad-hoc payment)
    async fn create_product(&self, request: &SessionRequest) -> SessionResult<String> {
        let form = vec![("name".to_string(), ADHOC_PRODUCT_NAME.to_string())];

        let response = self
            .transport
            .send(Method::Post, "/products", &form, &request.secret_key)
            .await
            .map_err(|e| Step::Product.from_transport(e))?;

        let product_id = extract_field(Step::Product, response, "id")?;
        debug!("Created product: id={}", product_id);
        Ok(product_id)
    }

    /// `POST /prices`: price the throwaway product (ad-hoc payment)
    async fn create_price(
        &self,
        request: &SessionRequest,
        product_id: &str,
    ) -> SessionResult<String> {
        // Both guaranteed by validate() on the ad-hoc path
        let amount = request.amount.ok_or(SessionError::MissingField("amount"))?;
        let currency = request
            .currency
            .clone()
            .ok_or(SessionError::MissingField("currency"))?;

        let form = vec![
            ("unit_amount".to_string(), amount.to_string()),
            ("currency".to_string(), currency),
            ("product".to_string(), product_id.to_string()),
        ];

        let response = self
            .transport
            .send(Method::Post, "/prices", &form, &request.secret_key)
            .await
            .map_err(|e| Step::Price.from_transport(e))?;

        let price_id = extract_field(Step::Price, response, "id")?;
        debug!("Created price: id={}", price_id);
        Ok(price_id)
    }

    /// `POST /checkout/sessions`: the terminal step for both workflows
    async fn create_checkout_session(
        &self,
        request: &SessionRequest,
        price_id: &str,
    ) -> SessionResult<String> {
        let mut form = vec![
            ("line_items[0][price]".to_string(), price_id.to_string()),
            (
                "line_items[0][quantity]".to_string(),
                request.quantity.to_string(),
            ),
            ("mode".to_string(), request.mode.as_str().to_string()),
            ("success_url".to_string(), request.success_url.clone()),
        ];

        if let Some(cancel_url) = &request.cancel_url {
            form.push(("cancel_url".to_string(), cancel_url.clone()));
        }

        if request.mode == CheckoutMode::Subscription {
            if let Some(customer_id) = &request.customer_id {
                form.push(("customer".to_string(), customer_id.clone()));
            }
        }

        let response = self
            .transport
            .send(Method::Post, "/checkout/sessions", &form, &request.secret_key)
            .await
            .map_err(|e| Step::CheckoutSession.from_transport(e))?;

        extract_field(Step::CheckoutSession, response, "url")
    }
}

/// Pull a string field out of a 2xx response, or halt the chain
fn extract_field(step: Step, response: Value, field: &str) -> SessionResult<String> {
    let value = response
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned);

    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(step.missing_identifier(response)),
    }
}
