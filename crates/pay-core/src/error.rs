//! # Checkout Error Types
//!
//! Typed errors raised inside the checkout pipeline.
//! The dispatcher never lets these escape; every one of them is folded into
//! an error [`PaymentResult`](crate::result::PaymentResult) record.

use crate::mode::{supported_mode_names, PaymentMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type for checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Amount is zero, negative, or not a finite number
    #[error("Invalid amount: ${amount:.2}. Amount must be greater than 0.")]
    InvalidAmount { amount: f64 },

    /// Mode has no handler behind it
    #[error("Invalid or unsupported payment mode: {mode}. Supported payment modes: {}", supported_mode_names())]
    UnsupportedMode { mode: PaymentMode },

    /// A payment handler failed while processing
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Configuration errors (bad env values, unreadable settings)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error category reported on failed payment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidAmount,
    UnsupportedMode,
    UnexpectedFailure,
}

impl CheckoutError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            CheckoutError::UnsupportedMode { .. } => ErrorKind::UnsupportedMode,
            CheckoutError::Provider { .. } | CheckoutError::Configuration(_) => {
                ErrorKind::UnexpectedFailure
            }
        }
    }
}

impl ErrorKind {
    /// Returns the HTTP status code appropriate for this error kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidAmount => 400,
            ErrorKind::UnsupportedMode => 400,
            ErrorKind::UnexpectedFailure => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
