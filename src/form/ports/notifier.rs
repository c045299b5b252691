//! Notification sink port.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The submission was accepted.
    Success,
    /// The submission was rejected.
    Error,
}

impl NotificationKind {
    /// Returns the canonical kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation-agnostic feedback sink.
///
/// The form calls this at most once per submission. Implementations decide
/// how the message reaches the user (toast, status line, log).
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, kind: NotificationKind, message: &str);
}
