//! Aggregate view over a batch of checkout results.

use crate::result::PaymentResult;
use serde::{Deserialize, Serialize};

/// Counts and totals for a batch of results
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Results seen
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Sum of amounts over successful results only
    pub total_amount: f64,
}

impl CheckoutSummary {
    pub fn from_results(results: &[PaymentResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.total += 1;
            if result.is_success() {
                summary.succeeded += 1;
                summary.total_amount += result.amount;
            } else {
                summary.failed += 1;
            }
            summary
        })
    }
}
