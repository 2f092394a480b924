//! # pay-core
//!
//! Core types and dispatch for the mode-checkout payment demo.
//!
//! This crate provides:
//! - `PaymentMode` and the `resolve` function for turning aliases and codes into modes
//! - `PaymentHandler` trait for implementing payment providers
//! - `Checkout` dispatcher that validates amounts and routes to handlers
//! - `PaymentResult` record returned by every checkout
//! - `CheckoutError` for typed error handling inside the pipeline
//! - `TransactionIdGenerator` for pluggable transaction ids
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{resolve, Checkout};
//!
//! // Build a dispatcher with handlers registered (see pay-mock)
//! let checkout: Checkout = pay_mock::mock_checkout(ids);
//!
//! let mode = resolve("cc");
//! let result = checkout.checkout(mode, 150.75);
//!
//! if result.is_success() {
//!     println!("paid: {:?}", result.transaction_id);
//! }
//! ```

pub mod checkout;
pub mod error;
pub mod mode;
pub mod result;
pub mod strategy;
pub mod summary;
pub mod txn;

// Re-exports for convenience
pub use checkout::{reject_unsupported, Checkout};
pub use error::{CheckoutError, CheckoutResult, ErrorKind};
pub use mode::{
    resolve, supported_mode_names, supported_modes, ModeInput, PaymentMode, SUPPORTED_MODES,
};
pub use result::{PaymentResult, PaymentStatus};
pub use strategy::{BoxedPaymentHandler, PaymentHandler};
pub use summary::CheckoutSummary;
pub use txn::{
    SequentialTransactionIds, SharedIdGenerator, TransactionIdGenerator, UuidTransactionIds,
};
