//! In-memory notifier that records every notification.

use std::sync::{Arc, RwLock};

use crate::form::ports::{NotificationKind, Notifier};

/// One delivered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification tone.
    pub kind: NotificationKind,
    /// Rendered message text.
    pub message: String,
}

impl Notification {
    /// Creates a notification value.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Thread-safe notifier that keeps delivered notifications in order.
///
/// Clones share the same log, so a caller can keep one handle and pass
/// another to the form service.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every notification so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log
            .read()
            .map(|log| log.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    /// Discards recorded notifications.
    pub fn clear(&self) {
        match self.log.write() {
            Ok(mut log) => log.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let notification = Notification::new(kind, message);
        match self.log.write() {
            Ok(mut log) => log.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
