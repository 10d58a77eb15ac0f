//! Drive a report dialog from a draft: open, fill, submit.

use std::path::Path;
use std::sync::Arc;

use huntboard_core::report::{Attachment, DerivedSummary};
use huntboard_core::repository::ReportRepository;
use huntboard_core::{Catalog, NotificationSink, ReportBuilder, ReportDialog, SubmitOutcome};

use crate::config::ReporterConfig;
use crate::draft::{self, ReportDraft};
use crate::error::ReporterError;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    /// Summary as shown in the dialog right before submitting.
    pub summary: DerivedSummary,
    pub outcome: SubmitOutcome,
}

impl SessionResult {
    pub fn is_submitted(&self) -> bool {
        matches!(self.outcome, SubmitOutcome::Submitted { .. })
    }
}

/// Load the catalog override named in the config, or the built-in one.
pub fn load_catalog(config: &ReporterConfig) -> Result<Catalog, ReporterError> {
    match &config.catalog_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| ReporterError::Io {
                path: path.clone(),
                source,
            })?;
            let catalog = Catalog::from_json(&json)?;
            tracing::info!(
                path = %path.display(),
                testing_types = catalog.testing_types.len(),
                "Loaded catalog override"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::default()),
    }
}

/// Apply `draft` to `builder` through the same operations the form uses.
///
/// The first draft test case fills the default `TC_001` entry; later ones
/// are added. Attachments are read from disk relative to `base_dir` and
/// added as one selection.
pub fn replay(
    draft: &ReportDraft,
    base_dir: &Path,
    builder: &mut ReportBuilder,
) -> Result<(), ReporterError> {
    for update in draft.metadata.updates() {
        builder.update_metadata_field(update);
    }

    for (i, case) in draft.test_cases.iter().enumerate() {
        if i > 0 {
            builder.add_test_case();
        }
        let index = builder.test_cases().len() - 1;
        for update in case.updates() {
            builder.update_test_case(index, update)?;
        }
    }

    for bug in &draft.bugs {
        builder.add_bug();
        let index = builder.bugs().len() - 1;
        for update in bug.updates() {
            builder.update_bug(index, update)?;
        }
    }

    if let Some(conclusion) = &draft.conclusion {
        builder.set_conclusion(conclusion.clone());
    }

    let mut selected = Vec::with_capacity(draft.attachments.len());
    for relative in &draft.attachments {
        selected.push(read_attachment(&base_dir.join(relative))?);
    }
    if !selected.is_empty() {
        builder.add_attachments(selected);
    }

    tracing::debug!(
        test_cases = builder.test_cases().len(),
        bugs = builder.bugs().len(),
        attachments = builder.attachments().len(),
        "Draft replayed"
    );
    Ok(())
}

fn read_attachment(path: &Path) -> Result<Attachment, ReporterError> {
    let content = std::fs::read(path).map_err(|source| ReporterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let attachment = Attachment::new(name, content);
    Ok(match content_type_for(path) {
        Some(ct) => attachment.with_content_type(ct),
        None => attachment,
    })
}

/// MIME type for the file extensions testers usually attach.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "pdf" => Some("application/pdf"),
        "json" | "har" => Some("application/json"),
        "txt" | "log" => Some("text/plain"),
        "mp4" => Some("video/mp4"),
        _ => None,
    }
}

/// Full run: load the draft, open a dialog, replay, submit.
pub fn run(
    config: &ReporterConfig,
    sink: Arc<dyn NotificationSink>,
    repository: Option<Arc<dyn ReportRepository>>,
) -> Result<SessionResult, ReporterError> {
    let catalog = Arc::new(load_catalog(config)?);
    let draft = draft::load(&config.draft_path)?;
    let base_dir = config
        .draft_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut dialog = ReportDialog::new(config.dialog, catalog, sink);
    if let Some(repository) = repository {
        dialog = dialog.with_repository(repository);
    }

    let builder = dialog.open();
    replay(&draft, &base_dir, builder)?;
    let summary = builder.summary();

    let outcome = dialog.submit()?;
    Ok(SessionResult { summary, outcome })
}
