//! Persistence seam for submitted reports.
//!
//! The dialog works without a repository (the submit only notifies). When
//! one is attached, a successful submit saves a [`Report`] snapshot through
//! it. Storage details stay behind the trait.

use std::sync::Mutex;

use crate::error::CoreError;
use crate::report::Report;
use crate::types::ReportId;

/// Stores submitted reports.
pub trait ReportRepository: Send + Sync {
    fn save(&self, report: &Report) -> Result<ReportId, CoreError>;
}

/// Process-local repository keeping reports in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<Vec<(ReportId, Report)>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ReportId) -> Result<Report, CoreError> {
        let reports = self.lock()?;
        reports
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, r)| r.clone())
            .ok_or(CoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<(ReportId, Report)>>, CoreError> {
        self.reports
            .lock()
            .map_err(|_| CoreError::Internal("report store lock poisoned".to_string()))
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn save(&self, report: &Report) -> Result<ReportId, CoreError> {
        let id = uuid::Uuid::now_v7();
        self.lock()?.push((id, report.clone()));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::builder::ReportBuilder;

    #[test]
    fn saved_report_can_be_read_back() {
        let repo = InMemoryReportRepository::new();
        let mut builder = ReportBuilder::default();
        builder.set_conclusion("No blockers");
        let id = repo.save(&builder.snapshot()).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(id).unwrap().conclusion, "No blockers");
    }

    #[test]
    fn ids_are_unique() {
        let repo = InMemoryReportRepository::new();
        let snapshot = ReportBuilder::default().snapshot();
        let a = repo.save(&snapshot).unwrap();
        let b = repo.save(&snapshot).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let repo = InMemoryReportRepository::new();
        assert!(repo.is_empty());
        assert_matches!(repo.get(uuid::Uuid::nil()), Err(CoreError::NotFound(_)));
    }
}
