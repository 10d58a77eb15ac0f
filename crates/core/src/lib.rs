//! Huntboard manual testing report builder.
//!
//! Pure in-memory domain logic for the "Manual Testing Report" dialog of the
//! researcher dashboard:
//!
//! - [`report`] — metadata, test cases, bugs, attachments, derived summary.
//! - [`builder::ReportBuilder`] — editable report state and submit checks.
//! - [`dialog::ReportDialog`] — open/closed lifecycle and one-shot submit.
//! - [`catalog::Catalog`] — shared select option tables.
//! - [`notification`] — toast payloads and the injected sink trait.
//! - [`repository`] — optional persistence seam for submitted reports.
//!
//! Nothing here performs I/O.

pub mod builder;
pub mod catalog;
pub mod dialog;
pub mod error;
pub mod notification;
pub mod report;
pub mod repository;
pub mod types;

pub use builder::{MissingRequirement, ReportBuilder};
pub use catalog::Catalog;
pub use dialog::{DialogConfig, DraftPolicy, ReportDialog, SubmitOutcome};
pub use error::CoreError;
pub use notification::{Notification, NotificationSink, Tone};
