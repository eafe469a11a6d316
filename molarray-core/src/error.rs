//! Structured error types shared by the molarray crates.

use std::collections::TryReserveError;

use thiserror::Error;

/// Unified error type for container and sequence operations.
#[derive(Debug, Error)]
pub enum MolError {
    /// Index or slice bounds violated after normalization.
    #[error("index error: {0}")]
    Index(String),

    /// A search found no match.
    #[error("not found: {0}")]
    NotFound(String),

    /// A destructive or reductive operation on zero elements.
    #[error("empty container: {0}")]
    Empty(String),

    /// Growing the backing storage failed.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Invalid input (bad base, malformed region list, wrong molecule type).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error while loading or saving a sequence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Payload-free classification of a [`MolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Index,
    NotFound,
    Empty,
    Allocation,
    InvalidInput,
    Io,
}

impl MolError {
    /// The taxonomy entry this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MolError::Index(_) => ErrorKind::Index,
            MolError::NotFound(_) => ErrorKind::NotFound,
            MolError::Empty(_) => ErrorKind::Empty,
            MolError::Allocation(_) => ErrorKind::Allocation,
            MolError::InvalidInput(_) => ErrorKind::InvalidInput,
            MolError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Convenience alias used throughout molarray.
pub type Result<T> = std::result::Result<T, MolError>;
