//! # Payment Result Records
//!
//! The uniform success/error payload returned by every checkout call.

use crate::error::{CheckoutError, ErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome flag of a checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Error,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Error => "error",
        }
    }
}

/// Result of a single checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Success or error
    pub status: PaymentStatus,

    /// Provider name on success ("PayPal"), canonical mode name on error ("UNKNOWN")
    pub payment_mode: String,

    /// Amount as requested, unchanged (may be zero or negative on errors).
    /// A non-finite amount is kept on the record but serializes as JSON `null`.
    pub amount: f64,

    /// Provider-prefixed id, only present on success
    pub transaction_id: Option<String>,

    /// Human-readable outcome
    pub message: String,

    /// Error category (errors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,

    /// When the record was produced
    pub processed_at: DateTime<Utc>,
}

impl PaymentResult {
    /// Successful payment record
    pub fn success(
        payment_mode: impl Into<String>,
        amount: f64,
        transaction_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: PaymentStatus::Success,
            payment_mode: payment_mode.into(),
            amount,
            transaction_id: Some(transaction_id.into()),
            message: message.into(),
            error: None,
            processed_at: Utc::now(),
        }
    }

    /// Failed payment record carrying the error's message and kind
    pub fn failure(payment_mode: impl Into<String>, amount: f64, err: &CheckoutError) -> Self {
        Self::failure_with_message(payment_mode, amount, err.kind(), err.to_string())
    }

    /// Failed payment record with an explicit message
    pub fn failure_with_message(
        payment_mode: impl Into<String>,
        amount: f64,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: PaymentStatus::Error,
            payment_mode: payment_mode.into(),
            amount,
            transaction_id: None,
            message: message.into(),
            error: Some(kind),
            processed_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == PaymentStatus::Error
    }
}
