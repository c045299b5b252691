//! Random UUID identifier generator.

use crate::task::{domain::TaskId, ports::TaskIdGenerator};

/// Generates random version 4 UUID task identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIdGenerator;

impl TaskIdGenerator for UuidTaskIdGenerator {
    fn generate(&self) -> TaskId {
        TaskId::new()
    }
}
