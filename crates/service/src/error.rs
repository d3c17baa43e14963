//! Typed error enum for the service layer.
//!
//! Callers match on the failure mode (bad input, nothing matched, source
//! unavailable) instead of inspecting messages.

use goal_lookup_source::SourceError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Loading the dataset failed (fetch, status or parse).
    #[error("source: {0}")]
    Source(#[from] SourceError),

    /// Caller provided invalid input (blank name or difficulty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Nothing in the dataset matched.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
