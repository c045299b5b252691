//! Step definitions for task entry form scenarios.

mod given;
mod when;
pub mod world;
