//! # Transaction IDs
//!
//! Demo transaction ids are provider-prefixed strings (`PP_`, `GP_`, `CC_`).
//! They are not real identifiers; generation sits behind a small trait so
//! tests can swap in a deterministic sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Produces transaction ids for successful payments
pub trait TransactionIdGenerator: Send + Sync {
    /// Next id, starting with `prefix`
    fn next_id(&self, prefix: &str) -> String;
}

/// Type alias for a shared id generator
pub type SharedIdGenerator = Arc<dyn TransactionIdGenerator>;

/// Random ids: prefix + simple-format UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTransactionIds;

impl TransactionIdGenerator for UuidTransactionIds {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}{}", prefix, Uuid::new_v4().simple())
    }
}

/// Deterministic ids: prefix + zero-padded counter shared across providers
#[derive(Debug)]
pub struct SequentialTransactionIds {
    next: AtomicU64,
}

impl SequentialTransactionIds {
    /// Start counting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialTransactionIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionIdGenerator for SequentialTransactionIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{:06}", prefix, n)
    }
}
