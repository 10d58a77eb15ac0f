//! Shared option catalogs for the report forms.
//!
//! A single [`Catalog`] is built once (the built-in default or a JSON
//! override) and handed to every dialog as `Arc<Catalog>`, instead of each
//! form carrying its own copy of the option lists.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::report::{BugStatus, Severity, TestCaseStatus};

// ---------------------------------------------------------------------------
// Testing type keys
// ---------------------------------------------------------------------------

pub const TESTING_TYPE_FUNCTIONAL: &str = "functional";
pub const TESTING_TYPE_REGRESSION: &str = "regression";
pub const TESTING_TYPE_SMOKE: &str = "smoke";
pub const TESTING_TYPE_SANITY: &str = "sanity";
pub const TESTING_TYPE_INTEGRATION: &str = "integration";
pub const TESTING_TYPE_SYSTEM: &str = "system";
pub const TESTING_TYPE_USER_ACCEPTANCE: &str = "user_acceptance";
pub const TESTING_TYPE_USABILITY: &str = "usability";
pub const TESTING_TYPE_COMPATIBILITY: &str = "compatibility";
pub const TESTING_TYPE_PERFORMANCE: &str = "performance";
pub const TESTING_TYPE_SECURITY: &str = "security";
pub const TESTING_TYPE_EXPLORATORY: &str = "exploratory";
pub const TESTING_TYPE_API: &str = "api";
pub const TESTING_TYPE_ACCESSIBILITY: &str = "accessibility";
pub const TESTING_TYPE_LOCALIZATION: &str = "localization";

/// Built-in testing categories as `(value, label)` pairs, in display order.
pub const DEFAULT_TESTING_TYPES: &[(&str, &str)] = &[
    (TESTING_TYPE_FUNCTIONAL, "Functional Testing"),
    (TESTING_TYPE_REGRESSION, "Regression Testing"),
    (TESTING_TYPE_SMOKE, "Smoke Testing"),
    (TESTING_TYPE_SANITY, "Sanity Testing"),
    (TESTING_TYPE_INTEGRATION, "Integration Testing"),
    (TESTING_TYPE_SYSTEM, "System Testing"),
    (TESTING_TYPE_USER_ACCEPTANCE, "User Acceptance Testing"),
    (TESTING_TYPE_USABILITY, "Usability Testing"),
    (TESTING_TYPE_COMPATIBILITY, "Compatibility Testing"),
    (TESTING_TYPE_PERFORMANCE, "Performance Testing"),
    (TESTING_TYPE_SECURITY, "Security Testing"),
    (TESTING_TYPE_EXPLORATORY, "Exploratory Testing"),
    (TESTING_TYPE_API, "API Testing"),
    (TESTING_TYPE_ACCESSIBILITY, "Accessibility Testing"),
    (TESTING_TYPE_LOCALIZATION, "Localization Testing"),
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

impl CatalogOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Option lists used by the report builder forms.
///
/// Only `testing_types` may be overridden from JSON; the severity and status
/// lists mirror closed enums and are always rebuilt from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub testing_types: Vec<CatalogOption>,
    #[serde(skip_deserializing, default = "severity_options")]
    pub severities: Vec<CatalogOption>,
    #[serde(skip_deserializing, default = "test_case_status_options")]
    pub test_case_statuses: Vec<CatalogOption>,
    #[serde(skip_deserializing, default = "bug_status_options")]
    pub bug_statuses: Vec<CatalogOption>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            testing_types: DEFAULT_TESTING_TYPES
                .iter()
                .map(|(value, label)| CatalogOption::new(*value, *label))
                .collect(),
            severities: severity_options(),
            test_case_statuses: test_case_status_options(),
            bug_statuses: bug_status_options(),
        }
    }
}

impl Catalog {
    /// Parse a catalog override such as
    /// `{"testing_types": [{"value": "fuzzing", "label": "Fuzzing"}]}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject catalogs that would leave the testing type select unusable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.testing_types.is_empty() {
            return Err(CoreError::Validation(
                "Catalog must define at least one testing type".to_string(),
            ));
        }
        if let Some(blank) = self.testing_types.iter().find(|o| o.value.is_empty()) {
            return Err(CoreError::Validation(format!(
                "Testing type '{}' has an empty value",
                blank.label
            )));
        }
        Ok(())
    }

    pub fn is_known_testing_type(&self, value: &str) -> bool {
        self.testing_types.iter().any(|o| o.value == value)
    }

    pub fn testing_type_label(&self, value: &str) -> Option<&str> {
        self.testing_types
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

fn severity_options() -> Vec<CatalogOption> {
    Severity::ALL
        .iter()
        .map(|s| CatalogOption::new(s.as_str(), s.label()))
        .collect()
}

fn test_case_status_options() -> Vec<CatalogOption> {
    TestCaseStatus::ALL
        .iter()
        .map(|s| CatalogOption::new(s.as_str(), s.label()))
        .collect()
}

fn bug_status_options() -> Vec<CatalogOption> {
    BugStatus::ALL
        .iter()
        .map(|s| CatalogOption::new(s.as_str(), s.label()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
