//! In-memory adapters for task records.

mod id_generator;
mod store;

pub use id_generator::SequentialTaskIdGenerator;
pub use store::InMemoryTaskStore;
