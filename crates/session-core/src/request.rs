//! # Session Request Types
//!
//! Request-scoped value objects for one `create_payment_session` call.
//! Nothing here persists across invocations.

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};

/// Checkout mode selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
    /// Recurring subscription
    Subscription,
}

impl Default for CheckoutMode {
    fn default() -> Self {
        CheckoutMode::Payment
    }
}

impl CheckoutMode {
    /// Parse the caller-supplied mode string.
    ///
    /// Case-insensitive match against the literal `"subscription"`; any
    /// other value, including absent, selects the payment workflow.
    pub fn parse(mode: Option<&str>) -> Self {
        match mode {
            Some(m) if m.eq_ignore_ascii_case("subscription") => CheckoutMode::Subscription,
            _ => CheckoutMode::Payment,
        }
    }

    /// Wire value for the `mode` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// A validated request to create one checkout session.
///
/// The secret key is caller data, scoped to this request; it is never held
/// in server configuration or logged.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Provider secret key, sent as the bearer credential on every call
    pub secret_key: String,

    /// Payment vs subscription workflow
    pub mode: CheckoutMode,

    /// ISO 4217 currency code (required for ad-hoc payment)
    pub currency: Option<String>,

    /// Amount in minor units, >= 0 (required for ad-hoc payment)
    pub amount: Option<i64>,

    /// Where the provider redirects after a completed payment (required)
    pub success_url: String,

    /// Where the provider redirects on cancel (optional)
    pub cancel_url: Option<String>,

    /// Existing provider price; skips product/price creation when supplied.
    /// Required for subscriptions.
    pub price_id: Option<String>,

    /// Provider customer, attached to subscription sessions
    pub customer_id: Option<String>,

    /// Line-item quantity, >= 1
    pub quantity: u32,
}

impl SessionRequest {
    /// Create an ad-hoc payment request (product and price are synthesized)
    pub fn payment(
        secret_key: impl Into<String>,
        currency: impl Into<String>,
        amount: i64,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            mode: CheckoutMode::Payment,
            currency: Some(currency.into()),
            amount: Some(amount),
            success_url: success_url.into(),
            cancel_url: None,
            price_id: None,
            customer_id: None,
            quantity: 1,
        }
    }

    /// Create a subscription request for an existing provider price
    pub fn subscription(
        secret_key: impl Into<String>,
        price_id: impl Into<String>,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            mode: CheckoutMode::Subscription,
            currency: None,
            amount: None,
            success_url: success_url.into(),
            cancel_url: None,
            price_id: Some(price_id.into()),
            customer_id: None,
            quantity: 1,
        }
    }

    /// Builder: set cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Builder: set an existing price (payment mode skips product/price
    /// creation when this is present)
    pub fn with_price_id(mut self, price_id: impl Into<String>) -> Self {
        self.price_id = Some(price_id.into());
        self
    }

    /// Builder: set the provider customer
    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Builder: set line-item quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Reject incomplete requests before any network call.
    ///
    /// This is a hard stop: a request that fails here produces no side
    /// effects at the provider.
    pub fn validate(&self) -> SessionResult<()> {
        if self.secret_key.is_empty() {
            return Err(SessionError::MissingField("secretKey"));
        }
        if self.success_url.is_empty() {
            return Err(SessionError::MissingField("paymentSuccessUrl"));
        }
        if self.quantity == 0 {
            return Err(SessionError::InvalidRequest(
                "itemQuantity must be at least 1".to_string(),
            ));
        }

        match self.mode {
            CheckoutMode::Subscription => {
                if self.price_id.as_deref().unwrap_or("").is_empty() {
                    return Err(SessionError::MissingField("priceID"));
                }
            }
            CheckoutMode::Payment => {
                // A caller-supplied price stands in for currency + amount
                if self.price_id.as_deref().unwrap_or("").is_empty() {
                    if self.currency.as_deref().unwrap_or("").is_empty() {
                        return Err(SessionError::MissingField("currency"));
                    }
                    match self.amount {
                        None => return Err(SessionError::MissingField("amount")),
                        Some(a) if a < 0 => {
                            return Err(SessionError::InvalidRequest(
                                "amount must not be negative".to_string(),
                            ));
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        Ok(())
    }
}

/// Terminal output of one orchestration: exactly one of
/// {`redirect_url` present, `message` describing failure} holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Whether a session was created
    pub ok: bool,

    /// Provider-hosted checkout page URL (success only)
    #[serde(rename = "redirectUrl", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// Failure description (empty on success)
    #[serde(default)]
    pub message: String,
}

impl SessionOutcome {
    /// Successful orchestration with a redirect URL
    pub fn success(redirect_url: impl Into<String>) -> Self {
        Self {
            ok: true,
            redirect_url: Some(redirect_url.into()),
            message: String::new(),
        }
    }

    /// Terminated orchestration with a descriptive message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            redirect_url: None,
            message: message.into(),
        }
    }
}
