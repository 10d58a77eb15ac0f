//! Log-only notification sink.

use huntboard_core::notification::{Notification, NotificationSink, Tone};

/// Writes each notification as a structured log line: destructive toasts
/// at `warn`, everything else at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.tone {
            Tone::Destructive => tracing::warn!(
                title = %notification.title,
                body = %notification.message,
                "Notification"
            ),
            Tone::Default => tracing::info!(
                title = %notification.title,
                body = %notification.message,
                "Notification"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_without_a_subscriber_installed() {
        let sink = TracingNotifier;
        sink.notify(Notification::validation_failed());
        sink.notify(Notification::report_submitted());
    }
}
