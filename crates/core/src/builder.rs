//! Editable state of one manual testing report.
//!
//! [`ReportBuilder`] owns the metadata, the two dynamic lists (test cases and
//! bugs), the conclusion and the attachments. It exposes add/update/remove
//! operations for the form controls, a live [`DerivedSummary`], and the
//! required-field check run on submit. It has no notion of the dialog or
//! of notifications; see [`crate::dialog`].

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::report::labels::{BUG_PREFIX, TEST_CASE_PREFIX};
use crate::report::{
    compute_summary, Attachment, Bug, BugUpdate, DerivedSummary, LabelAllocator, LabelStrategy,
    MetadataUpdate, Report, ReportMetadata, TestCase, TestCaseUpdate,
};

// ---------------------------------------------------------------------------
// Missing requirements
// ---------------------------------------------------------------------------

/// A required part of the report that is absent at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRequirement {
    ProjectName,
    ModuleName,
    TestingType,
    Severity,
    TestCases,
}

impl MissingRequirement {
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectName => "project name",
            Self::ModuleName => "module name",
            Self::TestingType => "testing type",
            Self::Severity => "severity",
            Self::TestCases => "at least one test case",
        }
    }

    fn from_field(field: &str) -> Option<Self> {
        match field {
            "project_name" => Some(Self::ProjectName),
            "module_name" => Some(Self::ModuleName),
            "testing_type" => Some(Self::TestingType),
            "severity" => Some(Self::Severity),
            _ => None,
        }
    }
}

impl fmt::Display for MissingRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Live, in-memory report being edited.
///
/// The test case list always holds at least one entry. Identifiers are
/// assigned on creation by a [`LabelAllocator`] and never renumbered.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    metadata: ReportMetadata,
    test_cases: Vec<TestCase>,
    bugs: Vec<Bug>,
    conclusion: String,
    attachments: Vec<Attachment>,
    test_case_labels: LabelAllocator,
    bug_labels: LabelAllocator,
    test_case_revision: u64,
}

impl ReportBuilder {
    /// Fresh report: blank metadata dated today and a single `TC_001`.
    pub fn new(strategy: LabelStrategy) -> Self {
        Self::with_metadata(ReportMetadata::new(), strategy)
    }

    pub fn with_metadata(metadata: ReportMetadata, strategy: LabelStrategy) -> Self {
        let mut test_case_labels = LabelAllocator::new(TEST_CASE_PREFIX, strategy);
        let first = TestCase::new(test_case_labels.next(0));
        Self {
            metadata,
            test_cases: vec![first],
            bugs: Vec::new(),
            conclusion: String::new(),
            attachments: Vec::new(),
            test_case_labels,
            bug_labels: LabelAllocator::new(BUG_PREFIX, strategy),
            test_case_revision: 0,
        }
    }

    // --- Metadata ---

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    pub fn update_metadata_field(&mut self, update: MetadataUpdate) {
        self.metadata.apply(update);
    }

    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    pub fn set_conclusion(&mut self, conclusion: impl Into<String>) {
        self.conclusion = conclusion.into();
    }

    // --- Test cases ---

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Append a blank, passing test case and return it.
    pub fn add_test_case(&mut self) -> &TestCase {
        let id = self.test_case_labels.next(self.test_cases.len());
        self.test_cases.push(TestCase::new(id));
        self.bump_revision();
        &self.test_cases[self.test_cases.len() - 1]
    }

    pub fn update_test_case(&mut self, index: usize, update: TestCaseUpdate) -> Result<(), CoreError> {
        let len = self.test_cases.len();
        let tc = self
            .test_cases
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange {
                list: "test case",
                index,
                len,
            })?;
        tc.apply(update);
        self.bump_revision();
        Ok(())
    }

    /// Whether the remove control for test cases should be enabled.
    pub fn can_remove_test_case(&self) -> bool {
        self.test_cases.len() > 1
    }

    /// Remove the case at `index`.
    ///
    /// Returns `Ok(false)` without touching the list when it is the only
    /// remaining case.
    pub fn remove_test_case(&mut self, index: usize) -> Result<bool, CoreError> {
        let len = self.test_cases.len();
        if index >= len {
            return Err(CoreError::IndexOutOfRange {
                list: "test case",
                index,
                len,
            });
        }
        if !self.can_remove_test_case() {
            return Ok(false);
        }
        self.test_cases.remove(index);
        self.bump_revision();
        Ok(true)
    }

    /// Incremented on every test case mutation. Used to key a
    /// [`SummaryMemo`](crate::report::SummaryMemo).
    pub fn test_case_revision(&self) -> u64 {
        self.test_case_revision
    }

    fn bump_revision(&mut self) {
        self.test_case_revision = self.test_case_revision.wrapping_add(1);
    }

    // --- Bugs ---

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    /// Append a blank bug (medium, open) and return it.
    pub fn add_bug(&mut self) -> &Bug {
        let id = self.bug_labels.next(self.bugs.len());
        self.bugs.push(Bug::new(id));
        &self.bugs[self.bugs.len() - 1]
    }

    pub fn update_bug(&mut self, index: usize, update: BugUpdate) -> Result<(), CoreError> {
        let len = self.bugs.len();
        let bug = self.bugs.get_mut(index).ok_or(CoreError::IndexOutOfRange {
            list: "bug",
            index,
            len,
        })?;
        bug.apply(update);
        Ok(())
    }

    /// Remove the bug at `index`. The list may become empty.
    pub fn remove_bug(&mut self, index: usize) -> Result<Bug, CoreError> {
        if index >= self.bugs.len() {
            return Err(CoreError::IndexOutOfRange {
                list: "bug",
                index,
                len: self.bugs.len(),
            });
        }
        Ok(self.bugs.remove(index))
    }

    // --- Attachments ---

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Append the files of one selection event, keeping earlier selections.
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(files);
    }

    pub fn remove_attachment(&mut self, index: usize) -> Result<Attachment, CoreError> {
        if index >= self.attachments.len() {
            return Err(CoreError::IndexOutOfRange {
                list: "attachment",
                index,
                len: self.attachments.len(),
            });
        }
        Ok(self.attachments.remove(index))
    }

    // --- Derived state ---

    /// Counts by status, recomputed from the current list on every call.
    pub fn summary(&self) -> DerivedSummary {
        compute_summary(&self.test_cases)
    }

    /// Required parts that are currently missing, in form order.
    ///
    /// Test case contents are not inspected; only the list being non-empty
    /// counts.
    pub fn missing_requirements(&self) -> Vec<MissingRequirement> {
        let mut missing: Vec<MissingRequirement> = match self.metadata.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .keys()
                .filter_map(|field| {
                    let name: &str = field;
                    MissingRequirement::from_field(name)
                })
                .collect(),
        };
        if self.test_cases.is_empty() {
            missing.push(MissingRequirement::TestCases);
        }
        missing.sort();
        missing.dedup();
        missing
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_requirements();
        if missing.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = missing.iter().map(|m| m.label()).collect();
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            names.join(", ")
        )))
    }

    /// Owned copy of the current state, including its summary.
    pub fn snapshot(&self) -> Report {
        Report {
            metadata: self.metadata.clone(),
            test_cases: self.test_cases.clone(),
            bugs: self.bugs.clone(),
            conclusion: self.conclusion.clone(),
            attachments: self.attachments.clone(),
            summary: self.summary(),
            captured_at: chrono::Utc::now(),
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(LabelStrategy::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::report::{BugStatus, Severity, TestCaseStatus};

    fn filled(strategy: LabelStrategy) -> ReportBuilder {
        let mut b = ReportBuilder::new(strategy);
        b.update_metadata_field(MetadataUpdate::ProjectName("Payments".into()));
        b.update_metadata_field(MetadataUpdate::ModuleName("Refunds".into()));
        b.update_metadata_field(MetadataUpdate::TestingType("security".into()));
        b.update_metadata_field(MetadataUpdate::Severity(Severity::High));
        b
    }

    #[test]
    fn starts_with_one_default_case() {
        let b = ReportBuilder::default();
        assert_eq!(b.test_cases().len(), 1);
        assert_eq!(b.test_cases()[0].id, "TC_001");
        assert_eq!(b.test_cases()[0].status, TestCaseStatus::Pass);
        assert!(b.bugs().is_empty());
        assert!(b.attachments().is_empty());
        assert!(!b.can_remove_test_case());
    }

    #[test]
    fn sole_case_cannot_be_removed() {
        let mut b = ReportBuilder::default();
        assert!(!b.remove_test_case(0).unwrap());
        assert_eq!(b.test_cases().len(), 1);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut b = ReportBuilder::default();
        assert_matches!(
            b.update_test_case(3, TestCaseUpdate::Steps("x".into())),
            Err(CoreError::IndexOutOfRange { index: 3, len: 1, .. })
        );
        assert_matches!(b.remove_test_case(1), Err(CoreError::IndexOutOfRange { .. }));
        assert_matches!(b.remove_bug(0), Err(CoreError::IndexOutOfRange { len: 0, .. }));
        assert_matches!(b.remove_attachment(0), Err(CoreError::IndexOutOfRange { .. }));
    }

    #[test]
    fn positional_labels_collide_after_removal() {
        let mut b = ReportBuilder::new(LabelStrategy::Positional);
        assert_eq!(b.add_test_case().id, "TC_002");
        assert_eq!(b.add_test_case().id, "TC_003");
        assert!(b.remove_test_case(1).unwrap());
        assert_eq!(b.add_test_case().id, "TC_003");
        let ids: Vec<&str> = b.test_cases().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["TC_001", "TC_003", "TC_003"]);
    }

    #[test]
    fn monotonic_labels_never_repeat() {
        let mut b = ReportBuilder::new(LabelStrategy::Monotonic);
        b.add_test_case();
        b.add_test_case();
        b.remove_test_case(1).unwrap();
        assert_eq!(b.add_test_case().id, "TC_004");
        let ids: Vec<&str> = b.test_cases().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["TC_001", "TC_003", "TC_004"]);
    }

    #[test]
    fn removing_a_bug_keeps_the_others_intact() {
        let mut b = ReportBuilder::default();
        for _ in 0..3 {
            b.add_bug();
        }
        b.update_bug(0, BugUpdate::Description("XSS in search".into())).unwrap();
        b.update_bug(1, BugUpdate::Description("Open redirect".into())).unwrap();
        b.update_bug(2, BugUpdate::Status(BugStatus::Fixed)).unwrap();

        let removed = b.remove_bug(1).unwrap();
        assert_eq!(removed.id, "BUG_002");

        assert_eq!(b.bugs().len(), 2);
        assert_eq!(b.bugs()[0].id, "BUG_001");
        assert_eq!(b.bugs()[0].description, "XSS in search");
        assert_eq!(b.bugs()[1].id, "BUG_003");
        assert_eq!(b.bugs()[1].status, BugStatus::Fixed);
    }

    #[test]
    fn last_bug_can_be_removed() {
        let mut b = ReportBuilder::default();
        b.add_bug();
        b.remove_bug(0).unwrap();
        assert!(b.bugs().is_empty());
    }

    #[test]
    fn attachments_accumulate_across_selections() {
        let mut b = ReportBuilder::default();
        b.add_attachments(vec![
            Attachment::new("a.png", vec![1]),
            Attachment::new("b.png", vec![2]),
        ]);
        b.add_attachments([Attachment::new("c.log", vec![3])]);
        assert_eq!(b.attachments().len(), 3);

        let removed = b.remove_attachment(1).unwrap();
        assert_eq!(removed.name, "b.png");
        let names: Vec<&str> = b.attachments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a.png", "c.log"]);
    }

    #[test]
    fn summary_tracks_status_edits() {
        let mut b = ReportBuilder::default();
        b.add_test_case();
        b.add_test_case();
        b.update_test_case(1, TestCaseUpdate::Status(TestCaseStatus::Fail)).unwrap();
        b.update_test_case(2, TestCaseUpdate::Status(TestCaseStatus::Blocked)).unwrap();
        let s = b.summary();
        assert_eq!(s.total, 3);
        assert_eq!((s.passed, s.failed, s.partial, s.blocked), (1, 1, 0, 1));
    }

    #[test]
    fn revision_moves_only_on_test_case_changes() {
        let mut b = ReportBuilder::default();
        let r0 = b.test_case_revision();
        b.add_bug();
        b.update_metadata_field(MetadataUpdate::Objective("Smoke the release".into()));
        assert_eq!(b.test_case_revision(), r0);
        b.add_test_case();
        assert!(b.test_case_revision() > r0);
    }

    #[test]
    fn blank_report_lists_every_metadata_requirement() {
        let b = ReportBuilder::default();
        assert_eq!(
            b.missing_requirements(),
            vec![
                MissingRequirement::ProjectName,
                MissingRequirement::ModuleName,
                MissingRequirement::TestingType,
                MissingRequirement::Severity,
            ]
        );
        let err = b.validate().unwrap_err();
        assert!(err.to_string().contains("project name"));
    }

    #[test]
    fn test_case_contents_are_not_validated() {
        let b = filled(LabelStrategy::Monotonic);
        assert!(b.test_cases()[0].scenario.is_empty());
        assert!(b.missing_requirements().is_empty());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn snapshot_carries_summary() {
        let mut b = filled(LabelStrategy::Monotonic);
        b.set_conclusion("Ship it");
        let report = b.snapshot();
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.conclusion, "Ship it");
        assert_eq!(report.metadata.project_name, "Payments");
    }
}
