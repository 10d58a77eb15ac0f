/// Identifier assigned to a report when a repository accepts it.
pub type ReportId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date of a test session (no time component).
pub type TestDate = chrono::NaiveDate;
