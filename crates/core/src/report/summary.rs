//! Per-status counts over the test case list.

use serde::{Deserialize, Serialize};

use crate::report::{TestCase, TestCaseStatus};

/// Counts derived from the current test cases. Never stored on the report
/// being edited; always recomputed from the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub partial: usize,
    pub blocked: usize,
}

impl DerivedSummary {
    pub fn count(&self, status: TestCaseStatus) -> usize {
        match status {
            TestCaseStatus::Pass => self.passed,
            TestCaseStatus::Fail => self.failed,
            TestCaseStatus::Partial => self.partial,
            TestCaseStatus::Blocked => self.blocked,
        }
    }

    /// Share of passing cases in `0.0..=1.0`; `0.0` for an empty list.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

/// Single pass over `test_cases`, partitioned by status.
pub fn compute_summary(test_cases: &[TestCase]) -> DerivedSummary {
    let mut summary = DerivedSummary {
        total: test_cases.len(),
        ..DerivedSummary::default()
    };
    for tc in test_cases {
        match tc.status {
            TestCaseStatus::Pass => summary.passed += 1,
            TestCaseStatus::Fail => summary.failed += 1,
            TestCaseStatus::Partial => summary.partial += 1,
            TestCaseStatus::Blocked => summary.blocked += 1,
        }
    }
    summary
}

/// Caches a summary against the revision of the list it was computed from.
///
/// Callers pass the builder's test case revision; the summary is recomputed
/// only when that revision changes.
#[derive(Debug, Default)]
pub struct SummaryMemo {
    cached: Option<(u64, DerivedSummary)>,
}

impl SummaryMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, revision: u64, test_cases: &[TestCase]) -> DerivedSummary {
        match self.cached {
            Some((rev, summary)) if rev == revision => summary,
            _ => {
                let summary = compute_summary(test_cases);
                self.cached = Some((revision, summary));
                summary
            }
        }
    }

    pub fn is_fresh(&self, revision: u64) -> bool {
        matches!(self.cached, Some((rev, _)) if rev == revision)
    }
}
