//! JSON report drafts.
//!
//! A draft is what a tester would type into the dialog, saved to a file:
//!
//! ```json
//! {
//!   "metadata": { "project_name": "Portal", "module_name": "Login",
//!                 "testing_type": "security", "severity": "high" },
//!   "test_cases": [ { "scenario": "Brute force lockout", "status": "fail" } ],
//!   "bugs": [ { "description": "No rate limit", "severity": "critical" } ],
//!   "conclusion": "Blocking issue found",
//!   "attachments": [ "evidence/lockout.png" ]
//! }
//! ```
//!
//! Every field is optional. Attachment paths are relative to the draft file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use huntboard_core::report::{
    BugStatus, BugUpdate, MetadataUpdate, Severity, TestCaseStatus, TestCaseUpdate,
};
use huntboard_core::types::TestDate;

use crate::error::ReporterError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DraftMetadata {
    pub project_name: Option<String>,
    pub module_name: Option<String>,
    pub tester_name: Option<String>,
    pub test_date: Option<TestDate>,
    pub testing_type: Option<String>,
    pub severity: Option<Severity>,
    pub operating_system: Option<String>,
    pub browser: Option<String>,
    pub network: Option<String>,
    pub objective: Option<String>,
}

impl DraftMetadata {
    /// Field edits for every value present in the draft, in form order.
    pub fn updates(&self) -> Vec<MetadataUpdate> {
        let mut updates = Vec::new();
        if let Some(v) = &self.project_name {
            updates.push(MetadataUpdate::ProjectName(v.clone()));
        }
        if let Some(v) = &self.module_name {
            updates.push(MetadataUpdate::ModuleName(v.clone()));
        }
        if let Some(v) = &self.tester_name {
            updates.push(MetadataUpdate::TesterName(v.clone()));
        }
        if let Some(v) = self.test_date {
            updates.push(MetadataUpdate::TestDate(v));
        }
        if let Some(v) = &self.testing_type {
            updates.push(MetadataUpdate::TestingType(v.clone()));
        }
        if let Some(v) = self.severity {
            updates.push(MetadataUpdate::Severity(v));
        }
        if let Some(v) = &self.operating_system {
            updates.push(MetadataUpdate::OperatingSystem(v.clone()));
        }
        if let Some(v) = &self.browser {
            updates.push(MetadataUpdate::Browser(v.clone()));
        }
        if let Some(v) = &self.network {
            updates.push(MetadataUpdate::Network(v.clone()));
        }
        if let Some(v) = &self.objective {
            updates.push(MetadataUpdate::Objective(v.clone()));
        }
        updates
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DraftTestCase {
    pub scenario: String,
    pub steps: String,
    pub expected_result: String,
    pub actual_result: String,
    pub status: TestCaseStatus,
    pub comments: String,
}

impl DraftTestCase {
    pub fn updates(&self) -> Vec<TestCaseUpdate> {
        vec![
            TestCaseUpdate::Scenario(self.scenario.clone()),
            TestCaseUpdate::Steps(self.steps.clone()),
            TestCaseUpdate::ExpectedResult(self.expected_result.clone()),
            TestCaseUpdate::ActualResult(self.actual_result.clone()),
            TestCaseUpdate::Status(self.status),
            TestCaseUpdate::Comments(self.comments.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DraftBug {
    pub description: String,
    pub severity: Severity,
    pub status: BugStatus,
}

impl DraftBug {
    pub fn updates(&self) -> Vec<BugUpdate> {
        vec![
            BugUpdate::Description(self.description.clone()),
            BugUpdate::Severity(self.severity),
            BugUpdate::Status(self.status),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportDraft {
    pub metadata: DraftMetadata,
    pub test_cases: Vec<DraftTestCase>,
    pub bugs: Vec<DraftBug>,
    pub conclusion: Option<String>,
    pub attachments: Vec<PathBuf>,
}

impl ReportDraft {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ReporterError> {
        serde_json::from_str(json).map_err(|source| ReporterError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Read and parse the draft at `path`.
pub fn load(path: &Path) -> Result<ReportDraft, ReporterError> {
    let json = std::fs::read_to_string(path).map_err(|source| ReporterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ReportDraft::from_json(path, &json)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_object_is_a_valid_draft() {
        let draft = ReportDraft::from_json(Path::new("d.json"), "{}").unwrap();
        assert!(draft.test_cases.is_empty());
        assert!(draft.metadata.updates().is_empty());
    }

    #[test]
    fn omitted_entry_fields_take_defaults() {
        let draft = ReportDraft::from_json(
            Path::new("d.json"),
            r#"{"test_cases": [{"scenario": "Upload"}], "bugs": [{}]}"#,
        )
        .unwrap();
        assert_eq!(draft.test_cases[0].status, TestCaseStatus::Pass);
        assert_eq!(draft.bugs[0].severity, Severity::Medium);
        assert_eq!(draft.bugs[0].status, BugStatus::Open);
    }

    #[test]
    fn metadata_updates_follow_present_fields() {
        let draft = ReportDraft::from_json(
            Path::new("d.json"),
            r#"{"metadata": {"project_name": "P", "severity": "low", "test_date": "2026-10-01"}}"#,
        )
        .unwrap();
        let updates = draft.metadata.updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0], MetadataUpdate::ProjectName("P".into()));
        assert_eq!(updates[2], MetadataUpdate::Severity(Severity::Low));
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let result = ReportDraft::from_json(
            Path::new("bad.json"),
            r#"{"test_cases": [{"status": "skipped"}]}"#,
        );
        assert_matches!(result, Err(ReporterError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert_matches!(
            load(Path::new("/nonexistent/huntboard/draft.json")),
            Err(ReporterError::Io { .. })
        );
    }
}
