//! Status computation errors.

use statline_domain::{AggregationError, DomainError};

use crate::infrastructure::ports::RepoError;

/// Errors local to one component's recompute cycle.
///
/// These never propagate to the notification trigger - the runner logs them
/// and returns to idle with the previously persisted record untouched.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
