//! Adapter implementations for the task store and identifier ports.
//!
//! - [`memory::InMemoryTaskStore`]: insertion-ordered in-memory store
//! - [`memory::SequentialTaskIdGenerator`]: deterministic identifiers for
//!   tests and demos
//! - [`UuidTaskIdGenerator`]: random v4 UUID identifiers

pub mod memory;

mod random;

pub use random::UuidTaskIdGenerator;
