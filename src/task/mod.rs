//! Task records for Taskform.
//!
//! A task record is the to-do entity an external store keeps. This module
//! defines the record, the store contract the form's commands target, and
//! the identifier generator the form uses when it creates a record:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
