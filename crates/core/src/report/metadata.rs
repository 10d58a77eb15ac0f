//! Scalar report fields and their required-field validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::report::Severity;
use crate::types::TestDate;

/// Where the tests were executed. Every field is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEnvironment {
    pub operating_system: String,
    pub browser: String,
    pub network: String,
}

/// Header fields of a manual testing report.
///
/// Free-text fields use the empty string for "not provided". The two select
/// fields (`testing_type`, `severity`) start unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReportMetadata {
    #[validate(length(min = 1))]
    pub project_name: String,
    #[validate(length(min = 1))]
    pub module_name: String,
    pub tester_name: String,
    pub test_date: TestDate,
    /// Key into [`Catalog::testing_types`](crate::catalog::Catalog).
    #[validate(required, length(min = 1))]
    pub testing_type: Option<String>,
    #[validate(required)]
    pub severity: Option<Severity>,
    pub environment: TestEnvironment,
    pub objective: String,
}

impl ReportMetadata {
    /// Blank metadata dated today (UTC).
    pub fn new() -> Self {
        Self::dated(chrono::Utc::now().date_naive())
    }

    /// Blank metadata with an explicit test date.
    pub fn dated(test_date: TestDate) -> Self {
        Self {
            project_name: String::new(),
            module_name: String::new(),
            tester_name: String::new(),
            test_date,
            testing_type: None,
            severity: None,
            environment: TestEnvironment::default(),
            objective: String::new(),
        }
    }

    /// Set a single field. No validation happens here; required fields are
    /// only checked when the report is submitted.
    pub fn apply(&mut self, update: MetadataUpdate) {
        match update {
            MetadataUpdate::ProjectName(v) => self.project_name = v,
            MetadataUpdate::ModuleName(v) => self.module_name = v,
            MetadataUpdate::TesterName(v) => self.tester_name = v,
            MetadataUpdate::TestDate(v) => self.test_date = v,
            MetadataUpdate::TestingType(v) => self.testing_type = Some(v),
            MetadataUpdate::Severity(v) => self.severity = Some(v),
            MetadataUpdate::OperatingSystem(v) => self.environment.operating_system = v,
            MetadataUpdate::Browser(v) => self.environment.browser = v,
            MetadataUpdate::Network(v) => self.environment.network = v,
            MetadataUpdate::Objective(v) => self.objective = v,
        }
    }
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-field edit of [`ReportMetadata`], one variant per form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum MetadataUpdate {
    ProjectName(String),
    ModuleName(String),
    TesterName(String),
    TestDate(TestDate),
    TestingType(String),
    Severity(Severity),
    OperatingSystem(String),
    Browser(String),
    Network(String),
    Objective(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ReportMetadata {
        let mut m = ReportMetadata::new();
        m.apply(MetadataUpdate::ProjectName("Storefront".into()));
        m.apply(MetadataUpdate::ModuleName("Checkout".into()));
        m.apply(MetadataUpdate::TestingType("functional".into()));
        m.apply(MetadataUpdate::Severity(Severity::High));
        m
    }

    #[test]
    fn new_metadata_is_dated_today() {
        let m = ReportMetadata::new();
        assert_eq!(m.test_date, chrono::Utc::now().date_naive());
        assert!(m.testing_type.is_none());
        assert!(m.severity.is_none());
    }

    #[test]
    fn complete_metadata_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn optional_fields_are_not_required() {
        let m = complete();
        assert!(m.tester_name.is_empty());
        assert!(m.objective.is_empty());
        assert_eq!(m.environment, TestEnvironment::default());
        assert!(m.validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported() {
        let errors = ReportMetadata::new().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("project_name"));
        assert!(fields.contains_key("module_name"));
        assert!(fields.contains_key("testing_type"));
        assert!(fields.contains_key("severity"));
        assert!(!fields.contains_key("tester_name"));
    }

    #[test]
    fn empty_testing_type_is_missing() {
        let mut m = complete();
        m.apply(MetadataUpdate::TestingType(String::new()));
        assert!(m.validate().is_err());
    }

    #[test]
    fn environment_updates_touch_nested_fields() {
        let mut m = ReportMetadata::new();
        m.apply(MetadataUpdate::OperatingSystem("Ubuntu 24.04".into()));
        m.apply(MetadataUpdate::Browser("Firefox 131".into()));
        m.apply(MetadataUpdate::Network("VPN".into()));
        assert_eq!(m.environment.operating_system, "Ubuntu 24.04");
        assert_eq!(m.environment.browser, "Firefox 131");
        assert_eq!(m.environment.network, "VPN");
    }

    #[test]
    fn update_deserializes_from_tagged_json() {
        let update: MetadataUpdate =
            serde_json::from_str(r#"{"field": "severity", "value": "critical"}"#).unwrap();
        assert_eq!(update, MetadataUpdate::Severity(Severity::Critical));
    }
}
