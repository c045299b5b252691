//! Port contracts consumed by the form core.

pub mod notifier;

pub use notifier::{NotificationKind, Notifier};
