//! Huntboard toast delivery.
//!
//! Concrete [`NotificationSink`](huntboard_core::NotificationSink)
//! implementations for the report dialog:
//!
//! - [`ToastBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`; the UI layer subscribes and renders toasts.
//! - [`ToastEvent`] — a notification stamped with its display window.
//! - [`TracingNotifier`] — writes notifications to the log.

pub mod bus;
pub mod log;

pub use bus::{ToastBus, ToastEvent};
pub use log::TracingNotifier;
