//! Error types for draft persistence.
//!
//! Only the storage side can fail. The form layer logs these and keeps the
//! in-memory state authoritative, so they surface to callers only through
//! the storage API and [`clear_persisted_draft`](crate::clear_persisted_draft).

use thiserror::Error;

/// Errors raised while reading or writing a persisted draft.
#[derive(Debug, Error)]
pub enum DraftError {
    /// IO error from a file-backed storage.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The draft could not be encoded or decoded as JSON.
    #[error("Failed to serialize draft: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key cannot be mapped to a location in the backend.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Backend-specific failure.
    #[error("Storage failure for '{key}': {message}")]
    Storage { key: String, message: String },
}

/// Result type alias for draft operations.
pub type Result<T> = std::result::Result<T, DraftError>;
