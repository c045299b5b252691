//! Port contracts for task records.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the form core
//! and implemented by collaborators.

pub mod id_generator;
pub mod store;

pub use id_generator::TaskIdGenerator;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
