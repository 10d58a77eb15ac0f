use serde::{Deserialize, Serialize};

use crate::report::{BugStatus, Severity};

/// A defect found while executing the test cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    /// Display identifier, e.g. `BUG_002`.
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub status: BugStatus,
}

impl Bug {
    /// Empty bug: medium severity, open.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            severity: Severity::Medium,
            status: BugStatus::Open,
        }
    }

    pub fn apply(&mut self, update: BugUpdate) {
        match update {
            BugUpdate::Description(v) => self.description = v,
            BugUpdate::Severity(v) => self.severity = v,
            BugUpdate::Status(v) => self.status = v,
        }
    }
}

/// A single-field edit of a [`Bug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum BugUpdate {
    Description(String),
    Severity(Severity),
    Status(BugStatus),
}
