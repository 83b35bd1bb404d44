//! # Request Handlers
//!
//! Axum handlers for the session bridge. The boundary request uses the
//! caller-facing camelCase field names and is translated exactly once into
//! the core's typed `SessionRequest`; all validation lives in the core.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use session_core::{CheckoutMode, SessionOutcome, SessionRequest};
use tracing::{error, info, instrument};

/// Caller-facing session request, field names as the application layer
/// sends them
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(rename = "secretKey", default)]
    pub secret_key: Option<String>,

    /// "payment" (default) or "subscription", case-insensitive
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    /// Amount in minor units
    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(rename = "paymentSuccessUrl", default)]
    pub payment_success_url: Option<String>,

    #[serde(rename = "paymentCancelUrl", default)]
    pub payment_cancel_url: Option<String>,

    #[serde(rename = "priceID", default)]
    pub price_id: Option<String>,

    #[serde(rename = "customerID", default)]
    pub customer_id: Option<String>,

    #[serde(rename = "itemQuantity", default = "default_quantity")]
    pub item_quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CreateSessionRequest {
    /// Translate into the core's typed request. Absent required fields
    /// become empty strings so the core's validation gate reports them.
    pub fn into_session_request(self) -> SessionRequest {
        SessionRequest {
            secret_key: self.secret_key.unwrap_or_default(),
            mode: CheckoutMode::parse(self.mode.as_deref()),
            currency: self.currency,
            amount: self.amount,
            success_url: self.payment_success_url.unwrap_or_default(),
            cancel_url: self.payment_cancel_url,
            price_id: self.price_id,
            customer_id: self.customer_id,
            quantity: self.item_quantity,
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "session-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session
#[instrument(skip(state, request))]
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionOutcome>, (StatusCode, Json<SessionOutcome>)> {
    let request = request.into_session_request();

    match state.orchestrator.run(&request).await {
        Ok(url) => {
            info!("Created checkout session");
            Ok(Json(SessionOutcome::success(url)))
        }
        Err(err) => {
            error!("Session creation failed: {}", err);
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(SessionOutcome::failure(err.to_string()))))
        }
    }
}
