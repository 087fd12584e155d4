//! Transport Layer for the Client
//!
//! The client only needs something that accepts request bytes and
//! eventually returns response bytes. Provides:
//! - Transport trait: interface for the exchange
//! - CannedTransport: answers every request with fixed bytes
//! - LoopbackTransport: in-process server behind a router

use std::sync::{Mutex, PoisonError};

use msgpair_server::{Router, ServerError};

/// Response bytes the canned transport uses unless told otherwise.
pub const DEFAULT_CANNED_RESPONSE: &[u8] = b"1.95";

/// Transport trait for request/response exchange
pub trait Transport: Send + Sync {
    /// Send `payload` for operation `op` and return the raw response
    fn exchange(&self, op: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Answers every request with the same bytes, recording what was sent
#[derive(Debug)]
pub struct CannedTransport {
    response: Vec<u8>,
    sent: Mutex<Vec<(String, Vec<u8>)>>,
}

impl CannedTransport {
    /// Create a canned transport answering with `response`
    pub fn new(response: impl Into<Vec<u8>>) -> Self {
        Self {
            response: response.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// The bytes every exchange returns
    pub fn response(&self) -> &[u8] {
        &self.response
    }

    /// Operation names and payloads sent so far, oldest first
    pub fn sent(&self) -> Vec<(String, Vec<u8>)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for CannedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_CANNED_RESPONSE)
    }
}

impl Transport for CannedTransport {
    fn exchange(&self, op: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((op.to_string(), payload.to_vec()));
        Ok(self.response.clone())
    }
}

/// Routes requests straight into an in-process server
#[derive(Debug)]
pub struct LoopbackTransport {
    router: Router,
}

impl LoopbackTransport {
    /// Create a loopback transport over `router`
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Get a reference to the underlying router
    pub fn router(&self) -> &Router {
        &self.router
    }
}

impl Default for LoopbackTransport {
    fn default() -> Self {
        Self::new(Router::standard())
    }
}

impl Transport for LoopbackTransport {
    fn exchange(&self, op: &str, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        Ok(self.router.dispatch(op, payload)?)
    }
}
