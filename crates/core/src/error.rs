//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Errors here are boundary validation failures only. Once inputs are
/// validated, every downstream computation degrades to an absent value
/// instead of failing (an unsupported currency suppresses the widget, it
/// does not raise).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A code was not in its expected ISO shape (e.g. parse failure).
    #[error("invalid code: {0}")]
    InvalidCode(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }
}
