//! # Payment Handler Trait
//!
//! Strategy pattern trait for payment handlers.
//! Implementations: the simulated PayPal, GooglePay and credit card handlers
//! in `pay-mock`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentHandler (trait)                    │
//! │  ├── mode()                                                 │
//! │  ├── provider_name()                                        │
//! │  └── process()                                              │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │    PayPal     │ │   GooglePay   │ │  Credit Card  │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::CheckoutResult;
use crate::mode::PaymentMode;
use crate::result::PaymentResult;
use std::sync::Arc;

/// Core trait for payment handler implementations.
///
/// The dispatcher has already validated the amount (finite and > 0) before
/// `process` is called. Returning `Err` is reported as an unexpected failure.
pub trait PaymentHandler: Send + Sync {
    /// The canonical mode this handler serves.
    fn mode(&self) -> PaymentMode;

    /// Human-readable provider name (e.g. "Credit Card").
    fn provider_name(&self) -> &'static str;

    /// Charge `amount` and build the success record.
    fn process(&self, amount: f64) -> CheckoutResult<PaymentResult>;
}

/// Type alias for a shared payment handler (dynamic dispatch)
pub type BoxedPaymentHandler = Arc<dyn PaymentHandler>;
