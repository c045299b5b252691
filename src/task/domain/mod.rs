//! Domain model for persisted to-do records.
//!
//! A task record is the entity the external store keeps. The form core
//! builds records from accepted drafts but never stores them itself.

mod error;
mod ids;
mod task;

pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use task::{TaskFields, TaskRecord, TaskStatus};
