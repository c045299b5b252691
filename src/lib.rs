//! Taskform: the decision-making core of a to-do entry form.
//!
//! This crate validates a task draft, detects whether an edit changed
//! anything, and turns accepted drafts into store commands and user
//! notifications. Rendering, toast display, persistence and identifier
//! generation stay outside the crate behind ports.
//!
//! # Architecture
//!
//! Taskform follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, logging)
//!
//! # Modules
//!
//! - [`task`]: Persisted task records, the store port and identifiers
//! - [`form`]: Form sessions, validation, change detection and dispatch

pub mod form;
pub mod task;
