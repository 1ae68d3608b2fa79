use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("unknown split type: {0}")]
    UnknownSplitType(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown issue type: {0}")]
    UnknownIssueType(String),
}
