//! User-facing toast notifications and the sink they are sent to.
//!
//! The core never renders anything itself. Dialogs are handed an
//! `Arc<dyn NotificationSink>`; concrete sinks (broadcast bus, log output)
//! live in `huntboard-events`.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Default,
    Destructive,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub tone: Tone,
}

// ---------------------------------------------------------------------------
// Fixed report notifications
// ---------------------------------------------------------------------------

pub const TITLE_VALIDATION_ERROR: &str = "Validation Error";
pub const TITLE_REPORT_SUBMITTED: &str = "Report Submitted";
pub const TITLE_SUBMISSION_FAILED: &str = "Submission Failed";

/// Collective message for any missing required field; never names the field.
pub const MESSAGE_VALIDATION_ERROR: &str =
    "Please fill in all required fields and add at least one test case.";
pub const MESSAGE_REPORT_SUBMITTED: &str =
    "Your manual testing report has been submitted successfully.";

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            tone,
        }
    }

    /// Shown when submit finds missing requirements. Which ones are missing
    /// is not spelled out to the user.
    pub fn validation_failed() -> Self {
        Self::new(
            TITLE_VALIDATION_ERROR,
            MESSAGE_VALIDATION_ERROR,
            Tone::Destructive,
        )
    }

    pub fn report_submitted() -> Self {
        Self::new(TITLE_REPORT_SUBMITTED, MESSAGE_REPORT_SUBMITTED, Tone::Default)
    }

    pub fn submission_failed(reason: impl Into<String>) -> Self {
        Self::new(TITLE_SUBMISSION_FAILED, reason, Tone::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.tone == Tone::Destructive
    }
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Fire-and-forget receiver of notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Keeps every notification in memory, in order. Useful for tests and for
/// embedding the builder without a UI.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        match self.received.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_collective() {
        let n = Notification::validation_failed();
        assert_eq!(n.title, TITLE_VALIDATION_ERROR);
        assert_eq!(n.message, MESSAGE_VALIDATION_ERROR);
        assert!(n.is_destructive());
        assert!(!n.message.contains("project name"));
    }

    #[test]
    fn success_uses_default_tone() {
        let n = Notification::report_submitted();
        assert_eq!(n.tone, Tone::Default);
        assert!(!n.is_destructive());
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify(Notification::new("one", "", Tone::Default));
        sink.notify(Notification::new("two", "", Tone::Destructive));
        let titles: Vec<String> = sink.notifications().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["one", "two"]);
        assert_eq!(sink.last().unwrap().title, "two");
    }

    #[test]
    fn arc_forwards_to_inner_sink() {
        let sink = Arc::new(RecordingSink::new());
        let shared: Arc<dyn NotificationSink> = sink.clone();
        shared.notify(Notification::report_submitted());
        assert_eq!(sink.notifications().len(), 1);
    }
}
