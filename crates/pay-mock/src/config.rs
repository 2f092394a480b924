//! # Mock Provider Configuration
//!
//! Settings for the simulated handlers, loaded from environment variables.

use pay_core::{CheckoutError, SequentialTransactionIds, SharedIdGenerator, UuidTransactionIds};
use std::env;
use std::sync::Arc;

/// How transaction ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Prefix + random UUID
    Uuid,
    /// Prefix + counter, reproducible across runs
    Sequential,
}

impl IdStrategy {
    pub fn parse(value: &str) -> Result<Self, CheckoutError> {
        match value.trim().to_lowercase().as_str() {
            "uuid" | "random" => Ok(IdStrategy::Uuid),
            "sequential" | "seq" | "counter" => Ok(IdStrategy::Sequential),
            other => Err(CheckoutError::Configuration(format!(
                "PAY_MOCK_TXN_IDS must be 'uuid' or 'sequential', got '{}'",
                other
            ))),
        }
    }
}

/// Mock handler configuration
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Transaction id strategy
    pub id_strategy: IdStrategy,

    /// First value of the sequential counter
    pub sequence_start: u64,
}

impl MockConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `PAY_MOCK_TXN_IDS` (`uuid` | `sequential`, default `uuid`)
    /// - `PAY_MOCK_SEQUENCE_START` (default `1`)
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let id_strategy = match env::var("PAY_MOCK_TXN_IDS") {
            Ok(value) => IdStrategy::parse(&value)?,
            Err(_) => IdStrategy::Uuid,
        };

        let sequence_start = match env::var("PAY_MOCK_SEQUENCE_START") {
            Ok(value) => value.trim().parse().map_err(|_| {
                CheckoutError::Configuration(format!(
                    "PAY_MOCK_SEQUENCE_START must be a non-negative integer, got '{}'",
                    value
                ))
            })?,
            Err(_) => 1,
        };

        Ok(Self {
            id_strategy,
            sequence_start,
        })
    }

    /// Create config with an explicit strategy
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            id_strategy,
            sequence_start: 1,
        }
    }

    /// Builder: set the first sequential id
    pub fn with_sequence_start(mut self, start: u64) -> Self {
        self.sequence_start = start;
        self
    }

    /// Build the configured id generator
    pub fn id_generator(&self) -> SharedIdGenerator {
        match self.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidTransactionIds),
            IdStrategy::Sequential => {
                Arc::new(SequentialTransactionIds::starting_at(self.sequence_start))
            }
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::new(IdStrategy::Uuid)
    }
}
