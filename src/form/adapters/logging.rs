//! Notifier that forwards notifications to `tracing`.

use crate::form::ports::{NotificationKind, Notifier};

/// Emits each notification as a structured log event.
///
/// Success notifications log at `info`, errors at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => {
                tracing::info!(target: "taskform::notify", kind = %kind, "{message}");
            }
            NotificationKind::Error => {
                tracing::warn!(target: "taskform::notify", kind = %kind, "{message}");
            }
        }
    }
}
