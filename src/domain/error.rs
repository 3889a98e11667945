//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the page hierarchy rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid title provided: {title}")]
    InvalidInput { title: String, reason: String },

    #[error("expected exactly one top level page, found {found}")]
    StructuralInvariantViolation { found: usize },
}

impl DomainError {
    pub fn invalid_input(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            title: title.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
