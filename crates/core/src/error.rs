//! Error types for typedstore
//!
//! The store contract itself is infallible: deserialization failure is
//! signaled as `None` from `get`, and `set`/`remove` have no error surface.
//! This error type covers the backend edges where I/O can fail, such as
//! opening or flushing a file-backed persistence facility.

use thiserror::Error;

/// Errors surfaced by persistence backends.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the backing medium
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
