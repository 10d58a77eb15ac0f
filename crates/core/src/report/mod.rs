//! Manual testing report model: header metadata, test cases, bugs,
//! attachments and the derived status summary.

pub mod attachment;
pub mod bug;
pub mod labels;
pub mod metadata;
pub mod status;
pub mod summary;
pub mod test_case;

use serde::{Deserialize, Serialize};

pub use attachment::Attachment;
pub use bug::{Bug, BugUpdate};
pub use labels::{LabelAllocator, LabelStrategy};
pub use metadata::{MetadataUpdate, ReportMetadata, TestEnvironment};
pub use status::{BugStatus, Severity, TestCaseStatus};
pub use summary::{compute_summary, DerivedSummary, SummaryMemo};
pub use test_case::{TestCase, TestCaseUpdate};

use crate::types::Timestamp;

/// Owned snapshot of a report at submission time.
///
/// Unlike the live builder state, the snapshot carries its summary so a
/// repository does not need to recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub test_cases: Vec<TestCase>,
    pub bugs: Vec<Bug>,
    pub conclusion: String,
    pub attachments: Vec<Attachment>,
    pub summary: DerivedSummary,
    pub captured_at: Timestamp,
}
