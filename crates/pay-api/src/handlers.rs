//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! Checkout endpoints always answer with a `PaymentResult` body; the HTTP
//! status mirrors the result's error kind.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pay_core::{resolve, supported_modes, CheckoutSummary, PaymentResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Checkout request
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Mode as a name/alias string, numeric code, or anything else (resolves to UNKNOWN)
    #[serde(default)]
    pub mode: serde_json::Value,
    /// Amount to charge
    pub amount: f64,
}

/// Batch checkout request
#[derive(Debug, Deserialize)]
pub struct BatchCheckoutRequest {
    #[serde(default)]
    pub payments: Vec<CheckoutRequest>,
}

/// Batch checkout response
#[derive(Debug, Serialize)]
pub struct BatchCheckoutResponse {
    pub results: Vec<PaymentResult>,
    pub summary: CheckoutSummary,
}

/// Supported mode entry
#[derive(Debug, Serialize)]
pub struct ModeInfo {
    pub code: i64,
    pub name: &'static str,
    /// Whether a handler is registered for this mode
    pub available: bool,
}

fn result_status(result: &PaymentResult) -> StatusCode {
    result
        .error
        .map(|kind| {
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        })
        .unwrap_or(StatusCode::OK)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "mode-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List supported payment modes
pub async fn list_modes(State(state): State<AppState>) -> impl IntoResponse {
    let modes: Vec<_> = supported_modes()
        .iter()
        .map(|mode| ModeInfo {
            code: mode.code(),
            name: mode.name(),
            available: state.checkout.has_handler(*mode),
        })
        .collect();

    Json(serde_json::json!({
        "modes": modes,
        "count": modes.len()
    }))
}

/// Run a single checkout
#[instrument(skip(state, request), fields(amount = request.amount))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> (StatusCode, Json<PaymentResult>) {
    let mode = resolve(request.mode);
    let result = state.checkout.checkout(mode, request.amount);

    info!("Checkout {} for mode {}", result.status.as_str(), mode);

    (result_status(&result), Json(result))
}

/// Run several checkouts; always 200, failures are reported per result
#[instrument(skip(state, request), fields(payments = request.payments.len()))]
pub async fn checkout_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchCheckoutRequest>,
) -> Json<BatchCheckoutResponse> {
    let results = state.checkout.checkout_batch(
        request
            .payments
            .into_iter()
            .map(|payment| (resolve(payment.mode), payment.amount)),
    );
    let summary = CheckoutSummary::from_results(&results);

    info!(
        "Batch checkout: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );

    Json(BatchCheckoutResponse { results, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{CheckoutError, ErrorKind};

    #[test]
    fn test_result_status() {
        let ok = PaymentResult::success("PayPal", 1.0, "PP_1", "ok");
        assert_eq!(result_status(&ok), StatusCode::OK);

        let bad = PaymentResult::failure("PAYPAL", 0.0, &CheckoutError::InvalidAmount { amount: 0.0 });
        assert_eq!(result_status(&bad), StatusCode::BAD_REQUEST);

        let broken = PaymentResult::failure_with_message("PAYPAL", 1.0, ErrorKind::UnexpectedFailure, "boom");
        assert_eq!(result_status(&broken), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_request_mode_defaults_to_null() {
        let request: CheckoutRequest = serde_json::from_str(r#"{"amount": 5.0}"#).unwrap();
        assert!(request.mode.is_null());
    }
}
