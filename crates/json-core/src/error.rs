//! Error types for JSON encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur during JSON encoding or decoding.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not one complete, valid JSON document (decoding
    /// path). `position` is the byte offset where the problem was detected.
    #[error("JSON decode error at position {position}: {message}")]
    Decode { position: usize, message: String },

    /// The value cannot be represented as JSON text (encoding path), e.g. a
    /// non-finite float.
    #[error("JSON encode error: {0}")]
    Encode(String),
}

impl JsonError {
    pub(crate) fn decode(position: usize, message: impl Into<String>) -> Self {
        JsonError::Decode {
            position,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout json-core.
pub type Result<T> = std::result::Result<T, JsonError>;
