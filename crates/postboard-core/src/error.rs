//! Domain-level error types.

use thiserror::Error;

/// Failures of the resource store and its persistence gateway.
///
/// A missing record is never an error: lookups return `None` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
