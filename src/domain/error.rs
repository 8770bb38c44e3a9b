//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent path operations the tree refuses.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    #[error("parent not found for: {0}")]
    ParentNotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
