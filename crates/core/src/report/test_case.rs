use serde::{Deserialize, Serialize};

use crate::report::TestCaseStatus;

/// One executed test scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Display identifier, e.g. `TC_003`. Assigned once and never renumbered.
    pub id: String,
    pub scenario: String,
    pub steps: String,
    pub expected_result: String,
    pub actual_result: String,
    pub status: TestCaseStatus,
    pub comments: String,
}

impl TestCase {
    /// Empty case with the default `pass` status.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scenario: String::new(),
            steps: String::new(),
            expected_result: String::new(),
            actual_result: String::new(),
            status: TestCaseStatus::default(),
            comments: String::new(),
        }
    }

    pub fn apply(&mut self, update: TestCaseUpdate) {
        match update {
            TestCaseUpdate::Scenario(v) => self.scenario = v,
            TestCaseUpdate::Steps(v) => self.steps = v,
            TestCaseUpdate::ExpectedResult(v) => self.expected_result = v,
            TestCaseUpdate::ActualResult(v) => self.actual_result = v,
            TestCaseUpdate::Status(v) => self.status = v,
            TestCaseUpdate::Comments(v) => self.comments = v,
        }
    }
}

/// A single-field edit of a [`TestCase`]. The identifier is not editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum TestCaseUpdate {
    Scenario(String),
    Steps(String),
    ExpectedResult(String),
    ActualResult(String),
    Status(TestCaseStatus),
    Comments(String),
}
