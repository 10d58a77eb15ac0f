use crate::types::ReportId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{list} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Report dialog is not open")]
    DialogClosed,

    #[error("Report not found: {0}")]
    NotFound(ReportId),

    #[error("Internal error: {0}")]
    Internal(String),
}
