//! In-process toast bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ToastBus`] is the publish/subscribe hub for [`ToastEvent`]s. It is
//! designed to be shared via `Arc<ToastBus>` and handed to dialogs as their
//! notification sink.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use huntboard_core::notification::{Notification, NotificationSink};

// ---------------------------------------------------------------------------
// ToastEvent
// ---------------------------------------------------------------------------

/// How long a toast stays on screen unless the user dismisses it.
pub const DEFAULT_TOAST_DURATION_SECS: i64 = 5;

/// A notification together with the window in which it should be shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastEvent {
    pub notification: Notification,

    /// When the toast was raised (UTC).
    pub created_at: DateTime<Utc>,

    /// After this instant the toast is hidden.
    pub expires_at: DateTime<Utc>,
}

impl ToastEvent {
    /// Stamp `notification` with the default display duration.
    pub fn new(notification: Notification) -> Self {
        Self::with_duration(notification, Duration::seconds(DEFAULT_TOAST_DURATION_SECS))
    }

    pub fn with_duration(notification: Notification, duration: Duration) -> Self {
        let created_at = Utc::now();
        Self {
            notification,
            created_at,
            expires_at: created_at + duration,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// ---------------------------------------------------------------------------
// ToastBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// In-process fan-out toast bus.
///
/// ```rust
/// use huntboard_core::Notification;
/// use huntboard_events::bus::{ToastBus, ToastEvent};
///
/// let bus = ToastBus::default();
/// let _rx = bus.subscribe();
///
/// bus.publish(ToastEvent::new(Notification::report_submitted()));
/// ```
pub struct ToastBus {
    sender: broadcast::Sender<ToastEvent>,
}

impl ToastBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest toasts are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a toast to all current subscribers.
    ///
    /// With no subscribers the toast is silently dropped.
    pub fn publish(&self, event: ToastEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl NotificationSink for ToastBus {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            subscribers = self.subscriber_count(),
            "Publishing toast"
        );
        self.publish(ToastEvent::new(notification));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use huntboard_core::Tone;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = ToastBus::default();
        let mut rx = bus.subscribe();

        bus.notify(Notification::validation_failed());

        let received = rx.recv().await.expect("should receive the toast");
        assert_eq!(received.notification.title, "Validation Error");
        assert_eq!(received.notification.tone, Tone::Destructive);
        assert!(received.expires_at > received.created_at);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_toast() {
        let bus = ToastBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(ToastEvent::new(Notification::report_submitted()));

        let t1 = rx1.recv().await.expect("subscriber 1 should receive");
        let t2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(t1.notification, t2.notification);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = ToastBus::default();
        bus.notify(Notification::report_submitted());
    }

    #[test]
    fn toast_expires_after_its_duration() {
        let toast = ToastEvent::with_duration(Notification::report_submitted(), Duration::seconds(2));
        assert!(!toast.is_expired_at(toast.created_at));
        assert!(toast.is_expired_at(toast.created_at + Duration::seconds(2)));
    }

    #[test]
    fn toast_serializes_notification_fields() {
        let toast = ToastEvent::new(Notification::report_submitted());
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["notification"]["tone"], "default");
        assert!(json["expires_at"].is_string());
    }
}
