//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using EntryError.
pub type Result<T> = std::result::Result<T, EntryError>;

/// Errors that can occur while encoding or decoding a stored word entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("failed to decode word entry: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode word entry: {0}")]
    Encode(#[source] serde_json::Error),
}
