//! Open/closed lifecycle of the report dialog and the one-shot submit.
//!
//! ```text
//!   Closed --open()--> Open
//!   Open --cancel() / dismiss()--> Closed
//!   Open --submit() [valid]--> Closed
//!   Open --submit() [invalid]--> Open (state untouched)
//! ```
//!
//! Each open starts from a fresh [`ReportBuilder`] unless the dialog is
//! configured with [`DraftPolicy::Preserve`], in which case a cancelled or
//! dismissed draft is restored on the next open. A submitted report is
//! never restored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::builder::{MissingRequirement, ReportBuilder};
use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::notification::{Notification, NotificationSink};
use crate::report::LabelStrategy;
use crate::repository::ReportRepository;
use crate::types::ReportId;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What happens to an unsubmitted draft when the dialog closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPolicy {
    #[default]
    Discard,
    Preserve,
}

impl DraftPolicy {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            "discard" => Ok(Self::Discard),
            "preserve" => Ok(Self::Preserve),
            _ => Err(CoreError::Validation(format!(
                "Invalid draft policy '{s}'. Must be one of: discard, preserve"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Preserve => "preserve",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    pub label_strategy: LabelStrategy,
    pub draft_policy: DraftPolicy,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum DialogState {
    Closed,
    Open(Box<ReportBuilder>),
}

/// Result of a submit on an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were missing; the dialog stays open.
    Rejected(Vec<MissingRequirement>),
    /// The report was accepted and the dialog closed. `report_id` is set only
    /// when a repository is attached.
    Submitted { report_id: Option<ReportId> },
}

// ---------------------------------------------------------------------------
// ReportDialog
// ---------------------------------------------------------------------------

/// The manual testing report dialog.
pub struct ReportDialog {
    state: DialogState,
    retained: Option<Box<ReportBuilder>>,
    config: DialogConfig,
    catalog: Arc<Catalog>,
    sink: Arc<dyn NotificationSink>,
    repository: Option<Arc<dyn ReportRepository>>,
}

impl ReportDialog {
    pub fn new(config: DialogConfig, catalog: Arc<Catalog>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            state: DialogState::Closed,
            retained: None,
            config,
            catalog,
            sink,
            repository: None,
        }
    }

    /// Save submitted reports through `repository`.
    pub fn with_repository(mut self, repository: Arc<dyn ReportRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn config(&self) -> DialogConfig {
        self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    /// Whether a cancelled draft is waiting to be restored.
    pub fn has_retained_draft(&self) -> bool {
        self.retained.is_some()
    }

    /// Open the dialog and return its builder. Opening an already open
    /// dialog keeps the current state.
    pub fn open(&mut self) -> &mut ReportBuilder {
        if !self.is_open() {
            let builder = match (self.config.draft_policy, self.retained.take()) {
                (DraftPolicy::Preserve, Some(draft)) => {
                    tracing::debug!("Restoring retained report draft");
                    draft
                }
                _ => Box::new(ReportBuilder::new(self.config.label_strategy)),
            };
            self.state = DialogState::Open(builder);
            tracing::debug!(
                label_strategy = self.config.label_strategy.as_str(),
                draft_policy = self.config.draft_policy.as_str(),
                "Report dialog opened"
            );
        }
        match &mut self.state {
            DialogState::Open(builder) => &mut **builder,
            DialogState::Closed => unreachable!("dialog was opened above"),
        }
    }

    pub fn builder(&self) -> Option<&ReportBuilder> {
        match &self.state {
            DialogState::Open(builder) => Some(&**builder),
            DialogState::Closed => None,
        }
    }

    pub fn builder_mut(&mut self) -> Result<&mut ReportBuilder, CoreError> {
        match &mut self.state {
            DialogState::Open(builder) => Ok(&mut **builder),
            DialogState::Closed => Err(CoreError::DialogClosed),
        }
    }

    /// Close via the cancel button.
    pub fn cancel(&mut self) {
        self.close_unsubmitted("cancel");
    }

    /// Close via overlay click or escape.
    pub fn dismiss(&mut self) {
        self.close_unsubmitted("dismiss");
    }

    fn close_unsubmitted(&mut self, reason: &'static str) {
        if let DialogState::Open(builder) =
            std::mem::replace(&mut self.state, DialogState::Closed)
        {
            if self.config.draft_policy == DraftPolicy::Preserve {
                self.retained = Some(builder);
            }
            tracing::debug!(reason, "Report dialog closed without submitting");
        }
    }

    /// Validate and submit the open report.
    ///
    /// Missing requirements produce a destructive notification and leave
    /// everything as it was. A valid report produces a success notification,
    /// is saved when a repository is attached, and closes the dialog.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CoreError> {
        let builder = match &self.state {
            DialogState::Open(builder) => builder,
            DialogState::Closed => return Err(CoreError::DialogClosed),
        };

        let missing = builder.missing_requirements();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|m| m.label()).collect();
            tracing::info!(missing = ?names, "Report submission rejected");
            self.sink.notify(Notification::validation_failed());
            return Ok(SubmitOutcome::Rejected(missing));
        }

        let metadata = builder.metadata();
        if let Some(testing_type) = metadata.testing_type.as_deref() {
            if !self.catalog.is_known_testing_type(testing_type) {
                tracing::warn!(testing_type, "Testing type is not in the catalog");
            }
        }

        let report_id = match &self.repository {
            Some(repository) => match repository.save(&builder.snapshot()) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to save report");
                    self.sink
                        .notify(Notification::submission_failed(e.to_string()));
                    return Err(e);
                }
            },
            None => None,
        };

        let summary = builder.summary();
        tracing::info!(
            project = %metadata.project_name,
            module = %metadata.module_name,
            total = summary.total,
            failed = summary.failed,
            bugs = builder.bugs().len(),
            attachments = builder.attachments().len(),
            report_id = ?report_id,
            "Report submitted"
        );

        self.sink.notify(Notification::report_submitted());
        self.state = DialogState::Closed;
        self.retained = None;
        Ok(SubmitOutcome::Submitted { report_id })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
