//! Severity and status enumerations shared by test cases and bugs.
//!
//! Each enum round-trips through the lowercase string values used by the
//! form selects (`as_str` / `from_str_value`) and carries a human-readable
//! label for display.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Impact rating, used both for the report as a whole and for each bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Parse a select value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(CoreError::Validation(format!(
                "Invalid severity '{s}'. Must be one of: critical, high, medium, low"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

// ---------------------------------------------------------------------------
// Test case status
// ---------------------------------------------------------------------------

/// Outcome of executing a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCaseStatus {
    #[default]
    Pass,
    Fail,
    Partial,
    Blocked,
}

impl TestCaseStatus {
    pub const ALL: [TestCaseStatus; 4] = [Self::Pass, Self::Fail, Self::Partial, Self::Blocked];

    /// Parse a select value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            "pass" => Ok(Self::Pass),
            "fail" => Ok(Self::Fail),
            "partial" => Ok(Self::Partial),
            "blocked" => Ok(Self::Blocked),
            _ => Err(CoreError::Validation(format!(
                "Invalid test case status '{s}'. Must be one of: pass, fail, partial, blocked"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Partial => "partial",
            Self::Blocked => "blocked",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Partial => "Partial",
            Self::Blocked => "Blocked",
        }
    }
}

// ---------------------------------------------------------------------------
// Bug status
// ---------------------------------------------------------------------------

/// Triage state of a bug found during testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    #[default]
    Open,
    Fixed,
    Rejected,
}

impl BugStatus {
    pub const ALL: [BugStatus; 3] = [Self::Open, Self::Fixed, Self::Rejected];

    /// Parse a select value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            "open" => Ok(Self::Open),
            "fixed" => Ok(Self::Fixed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid bug status '{s}'. Must be one of: open, fixed, rejected"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fixed => "fixed",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Fixed => "Fixed",
            Self::Rejected => "Rejected",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
