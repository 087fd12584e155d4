//! Server-side errors.

use std::io;

use msgpair_protocol::DecodeError;
use thiserror::Error;

/// Errors raised while serving a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Payload too large: {size} bytes exceeds maximum {max}")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
