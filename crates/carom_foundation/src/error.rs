//! Error types for the Carom system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Result alias used throughout Carom.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Carom operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid capacity error.
    #[must_use]
    pub fn invalid_capacity() -> Self {
        Self::new(ErrorKind::InvalidCapacity)
    }

    /// Creates a pool exhaustion error.
    #[must_use]
    pub fn pool_exhausted(requested: usize, available: usize) -> Self {
        Self::new(ErrorKind::PoolExhausted {
            requested,
            available,
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Store capacity must be at least one entity.
    #[error("store capacity must be positive")]
    InvalidCapacity,

    /// Allocation asked for more entities than the pool holds.
    #[error("no entities available: requested {requested}, pool holds {available}")]
    PoolExhausted {
        /// Number of entities the caller asked for.
        requested: usize,
        /// Number of entities left in the pool.
        available: usize,
    },

    /// Snapshot serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File I/O failed.
    #[error("i/o error: {0}")]
    IoError(String),
}
