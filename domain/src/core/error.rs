//! Domain error types

use super::query::QueryError;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Missing model selection")]
    MissingModel,
}

impl DomainError {
    /// Check if this error should be reported to the caller as bad input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidQuery(_) | DomainError::MissingModel)
    }
}
