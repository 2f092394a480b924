//! # pay-mock
//!
//! Simulated payment handlers for mode-checkout.
//!
//! Three handlers are provided, one per supported mode:
//!
//! | Mode | Provider | Transaction prefix |
//! |------|----------|--------------------|
//! | `PAYPAL` | PayPal | `PP_` |
//! | `GOOGLEPAY` | GooglePay | `GP_` |
//! | `CREDITCARD` | Credit Card | `CC_` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::PaymentMode;
//! use pay_mock::{mock_checkout_from_config, MockConfig};
//!
//! let checkout = mock_checkout_from_config(&MockConfig::from_env()?);
//! let result = checkout.checkout(PaymentMode::PayPal, 150.75);
//! ```

pub mod config;
pub mod provider;

use pay_core::{Checkout, SharedIdGenerator};
use std::sync::Arc;

// Re-exports
pub use config::{IdStrategy, MockConfig};
pub use provider::{MockPaymentHandler, MockProvider};

/// Dispatcher with every mock provider registered, sharing one id generator
pub fn mock_checkout(ids: SharedIdGenerator) -> Checkout {
    MockProvider::all()
        .into_iter()
        .fold(Checkout::new(), |checkout, provider| {
            checkout.with_handler(Arc::new(MockPaymentHandler::new(provider, ids.clone())))
        })
}

/// Dispatcher built from a [`MockConfig`]
pub fn mock_checkout_from_config(config: &MockConfig) -> Checkout {
    mock_checkout(config.id_generator())
}
