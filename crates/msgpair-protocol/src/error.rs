//! Error types for message decoding.

use std::num::ParseFloatError;
use std::str::Utf8Error;

use thiserror::Error;

/// Raised when a byte sequence is not a valid encoding of the target message.
///
/// Decoding either fully succeeds or fails with one of these; there are no
/// partial results or fallback values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload was expected to be UTF-8 text.
    #[error("{message}: payload is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Name of the message being decoded.
        message: &'static str,
        #[source]
        source: Utf8Error,
    },

    /// The payload was expected to be a decimal number.
    #[error("{message}: payload {raw:?} is not a number: {source}")]
    InvalidNumber {
        /// Name of the message being decoded.
        message: &'static str,
        /// The text that failed to parse.
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    /// The payload was expected to be a JSON document of a given shape.
    #[error("{message}: invalid JSON payload: {reason}")]
    InvalidJson {
        /// Name of the message being decoded.
        message: &'static str,
        /// Parser diagnostic, single line.
        reason: String,
    },
}

impl DecodeError {
    /// Name of the message whose decoding failed.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUtf8 { message, .. }
            | Self::InvalidNumber { message, .. }
            | Self::InvalidJson { message, .. } => message,
        }
    }
}
