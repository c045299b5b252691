//! Deterministic identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::task::{domain::TaskId, ports::TaskIdGenerator};

/// Generates identifiers from a monotonically increasing counter.
///
/// The first identifier is `00000000-0000-0000-0000-000000000001`. Values
/// are unique for the lifetime of one generator.
#[derive(Debug, Default)]
pub struct SequentialTaskIdGenerator {
    next: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator starting at one.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Returns the identifier the `n`th call to `generate` yields (1-based).
    #[must_use]
    pub fn nth(n: u64) -> TaskId {
        TaskId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn generate(&self) -> TaskId {
        let value = self.next.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        Self::nth(value)
    }
}
