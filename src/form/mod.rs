//! Task entry form core.
//!
//! The form creates or edits a single task record. It owns the draft for
//! one session, validates it on submit, detects whether an edit changed
//! anything, and emits a [`TaskCommand`](domain::TaskCommand) plus a user
//! notification. Nothing in this module touches a store; callers apply the
//! emitted command. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validation and change detection in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Behaviour settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
