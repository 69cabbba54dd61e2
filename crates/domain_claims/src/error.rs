//! Claims domain errors

use thiserror::Error;

use core_kernel::{MoneyError, PortError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Unsupported attachment '{0}': only .jpg, .jpeg, .png and .pdf files are accepted")]
    UnsupportedAttachment(String),

    #[error("{0}")]
    ProcessingFailed(String),

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown filter value: {0}")]
    UnknownFilter(String),

    #[error("Amount error: {0}")]
    Money(#[from] MoneyError),

    #[error("Data source error: {0}")]
    Port(PortError),
}

impl From<PortError> for ClaimError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => ClaimError::ClaimNotFound(id),
            other => ClaimError::Port(other),
        }
    }
}
