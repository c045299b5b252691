//! Identifier generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must return a value unique across every existing task
/// record. The form core calls this exactly once per accepted create.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn generate(&self) -> TaskId;
}
