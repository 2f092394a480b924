//! # Simulated Providers
//!
//! PayPal, GooglePay and credit card handlers. None of them talk to a real
//! network; every charge succeeds and gets a provider-prefixed transaction id.

use pay_core::{
    CheckoutResult, PaymentHandler, PaymentMode, PaymentResult, SharedIdGenerator,
};
use tracing::{debug, info, instrument};

/// The simulated providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockProvider {
    PayPal,
    GooglePay,
    CreditCard,
}

impl MockProvider {
    /// All providers, in mode-code order
    pub fn all() -> [MockProvider; 3] {
        [
            MockProvider::PayPal,
            MockProvider::GooglePay,
            MockProvider::CreditCard,
        ]
    }

    pub fn mode(&self) -> PaymentMode {
        match self {
            MockProvider::PayPal => PaymentMode::PayPal,
            MockProvider::GooglePay => PaymentMode::GooglePay,
            MockProvider::CreditCard => PaymentMode::CreditCard,
        }
    }

    /// Name shown on success records
    pub fn display_name(&self) -> &'static str {
        match self {
            MockProvider::PayPal => "PayPal",
            MockProvider::GooglePay => "GooglePay",
            MockProvider::CreditCard => "Credit Card",
        }
    }

    /// Transaction id prefix
    pub fn prefix(&self) -> &'static str {
        match self {
            MockProvider::PayPal => "PP_",
            MockProvider::GooglePay => "GP_",
            MockProvider::CreditCard => "CC_",
        }
    }

    /// The (pretend) upstream we connect to
    pub fn gateway(&self) -> &'static str {
        match self {
            MockProvider::PayPal => "PayPal API",
            MockProvider::GooglePay => "GooglePay API",
            MockProvider::CreditCard => "Credit Card processing gateway",
        }
    }
}

/// Always-succeeding handler for one simulated provider
pub struct MockPaymentHandler {
    provider: MockProvider,
    ids: SharedIdGenerator,
}

impl MockPaymentHandler {
    pub fn new(provider: MockProvider, ids: SharedIdGenerator) -> Self {
        Self { provider, ids }
    }

    pub fn paypal(ids: SharedIdGenerator) -> Self {
        Self::new(MockProvider::PayPal, ids)
    }

    pub fn creditcard(ids: SharedIdGenerator) -> Self {
        Self::new(MockProvider::CreditCard, ids)
    }
}

impl PaymentHandler for MockPaymentHandler {
    fn mode(&self) -> PaymentMode {
        self.provider.mode()
    }

    fn provider_name(&self) -> &'static str {
        self.provider.display_name()
    }

    #[instrument(skip(self), fields(provider = self.provider.display_name()))]
    fn process(&self, amount: f64) -> CheckoutResult<PaymentResult> {
        debug!("Connecting to {}...", self.provider.gateway());

        let transaction_id = self.ids.next_id(self.provider.prefix());

        info!(
            "Processed {} payment of ${:.2}: {}",
            self.provider.display_name(),
            amount,
            transaction_id
        );

        Ok(PaymentResult::success(
            self.provider.display_name(),
            amount,
            transaction_id,
            format!("{} payment completed successfully", self.provider.display_name()),
        ))
    }
}
