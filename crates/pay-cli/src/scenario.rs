//! # Checkout Scenarios
//!
//! A scenario is a list of payments loaded from TOML:
//!
//! ```toml
//! [[payments]]
//! label = "optional"
//! mode = "paypal"   # alias text or numeric code
//! amount = 150.75
//! ```

use anyhow::Context;
use pay_core::{resolve, Checkout, PaymentMode, PaymentResult};
use serde::Deserialize;
use std::path::Path;

const DEMO_SCENARIO: &str = include_str!("../scenarios/demo.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPayment {
    #[serde(default)]
    pub label: Option<String>,
    pub mode: toml::Value,
    pub amount: f64,
}

impl ScenarioPayment {
    pub fn resolved_mode(&self) -> PaymentMode {
        resolve(self.mode.clone())
    }

    /// Label if given, otherwise the raw mode input
    pub fn describe(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => match &self.mode {
                toml::Value::String(text) => format!("'{}'", text),
                other => other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub payments: Vec<ScenarioPayment>,
}

impl Scenario {
    /// The built-in demonstration run
    pub fn demo() -> anyhow::Result<Self> {
        Self::from_toml(DEMO_SCENARIO).context("Failed to parse built-in demo scenario")
    }

    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        let scenario: Self = toml::from_str(toml_str)?;
        if let Some((index, payment)) = scenario
            .payments
            .iter()
            .enumerate()
            .find(|(_, payment)| !payment.amount.is_finite())
        {
            anyhow::bail!(
                "payment {}: amount must be a finite number, got {}",
                index + 1,
                payment.amount
            );
        }
        Ok(scenario)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        let scenario = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded {} payments from {}", scenario.payments.len(), path.display());
        Ok(scenario)
    }

    /// Checkout every payment in order
    pub fn run(&self, checkout: &Checkout) -> Vec<PaymentResult> {
        checkout.checkout_batch(
            self.payments
                .iter()
                .map(|payment| (payment.resolved_mode(), payment.amount)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{CheckoutSummary, SequentialTransactionIds};
    use std::sync::Arc;

    #[test]
    fn test_demo_scenario() {
        let scenario = Scenario::demo().unwrap();
        assert_eq!(scenario.payments.len(), 9);
        assert_eq!(scenario.payments[3].resolved_mode(), PaymentMode::Unknown);
        assert_eq!(scenario.payments[8].describe(), "'bitcoin'");

        let checkout = pay_mock::mock_checkout(Arc::new(SequentialTransactionIds::new()));
        let summary = CheckoutSummary::from_results(&scenario.run(&checkout));

        assert_eq!(summary.total, 9);
        assert_eq!(summary.succeeded, 6);
        assert_eq!(summary.failed, 3);
        assert!((summary.total_amount - 678.75).abs() < 1e-9);
    }

    #[test]
    fn test_codes_and_labels() {
        let scenario = Scenario::from_toml(
            r#"
            [[payments]]
            mode = 2
            amount = 1.0

            [[payments]]
            label = "weird"
            mode = 1.5
            amount = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(scenario.payments[0].resolved_mode(), PaymentMode::GooglePay);
        assert_eq!(scenario.payments[0].describe(), "2");
        assert_eq!(scenario.payments[1].resolved_mode(), PaymentMode::Unknown);
        assert_eq!(scenario.payments[1].describe(), "weird");
    }

    #[test]
    fn test_non_finite_amount_is_error() {
        for amount in ["nan", "inf", "-inf"] {
            let toml_str = format!("[[payments]]\nmode = \"paypal\"\namount = {}\n", amount);
            let err = Scenario::from_toml(&toml_str).unwrap_err();
            assert!(err.to_string().contains("finite"));
        }
    }

    #[test]
    fn test_missing_amount_is_error() {
        assert!(Scenario::from_toml("[[payments]]\nmode = \"paypal\"\n").is_err());
    }
}
