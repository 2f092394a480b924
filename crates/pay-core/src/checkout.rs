//! # Checkout Dispatcher
//!
//! Validates the amount, routes to the handler registered for the mode and
//! folds every failure into a [`PaymentResult`]. Callers inspect `status`;
//! nothing here returns `Err` or panics on bad input.

use crate::error::{CheckoutError, ErrorKind};
use crate::mode::PaymentMode;
use crate::result::PaymentResult;
use crate::strategy::BoxedPaymentHandler;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Dispatcher holding one handler per supported mode
#[derive(Clone, Default)]
pub struct Checkout {
    handlers: HashMap<PaymentMode, BoxedPaymentHandler>,
}

impl Checkout {
    /// Create a dispatcher with no handlers
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its own mode, replacing any previous one.
    ///
    /// Handlers for unsupported modes are ignored.
    pub fn register(&mut self, handler: BoxedPaymentHandler) {
        let mode = handler.mode();
        if !mode.is_supported() {
            warn!("Ignoring handler {} for unsupported mode {}", handler.provider_name(), mode);
            return;
        }
        self.handlers.insert(mode, handler);
    }

    /// Register with builder pattern
    pub fn with_handler(mut self, handler: BoxedPaymentHandler) -> Self {
        self.register(handler);
        self
    }

    /// Modes with a registered handler, in code order
    pub fn modes(&self) -> Vec<PaymentMode> {
        let mut modes: Vec<_> = self.handlers.keys().copied().collect();
        modes.sort_by_key(PaymentMode::code);
        modes
    }

    /// Check if a mode has a handler
    pub fn has_handler(&self, mode: PaymentMode) -> bool {
        self.handlers.contains_key(&mode)
    }

    /// Run a checkout.
    ///
    /// Amount is checked first; an invalid amount is reported regardless of
    /// mode and no handler runs.
    #[instrument(skip(self, mode), fields(mode = %mode))]
    pub fn checkout(&self, mode: PaymentMode, amount: f64) -> PaymentResult {
        if !amount.is_finite() || amount <= 0.0 {
            let err = CheckoutError::InvalidAmount { amount };
            warn!("{}", err);
            return PaymentResult::failure(mode.name(), amount, &err);
        }

        let handler = match self.handlers.get(&mode) {
            Some(handler) if mode.is_supported() => handler,
            _ => return reject_unsupported(mode, amount),
        };

        debug!("Dispatching {:.2} to {}", amount, handler.provider_name());

        match handler.process(amount) {
            Ok(result) => {
                info!(
                    "Checkout {}: provider={}, transaction_id={:?}",
                    result.status.as_str(),
                    result.payment_mode,
                    result.transaction_id
                );
                result
            }
            Err(err) => {
                let message = format!("Unexpected error during payment processing: {}", err);
                warn!("{}", message);
                PaymentResult::failure_with_message(
                    mode.name(),
                    amount,
                    ErrorKind::UnexpectedFailure,
                    message,
                )
            }
        }
    }

    /// Run several checkouts in order, one result per input
    pub fn checkout_batch<I>(&self, payments: I) -> Vec<PaymentResult>
    where
        I: IntoIterator<Item = (PaymentMode, f64)>,
    {
        payments
            .into_iter()
            .map(|(mode, amount)| self.checkout(mode, amount))
            .collect()
    }
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("modes", &self.modes())
            .finish()
    }
}

/// Invalid-mode handler: always an error record, amount unchanged.
pub fn reject_unsupported(mode: PaymentMode, amount: f64) -> PaymentResult {
    let err = CheckoutError::UnsupportedMode { mode };
    warn!("{}", err);
    PaymentResult::failure(mode.name(), amount, &err)
}
