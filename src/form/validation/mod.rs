//! Submit-time validation.
//!
//! [`rules`] holds the ordered checks every submission passes through and
//! [`change`] compares an edit draft against its original record.

pub mod change;
pub mod rules;

pub use change::{ChangeSet, detect_changes};
pub use rules::{Completeness, check_completeness, validate_date_order, validate_title};
