//! Client Driver
//!
//! Sends any client-usable request and hands back its paired response,
//! typed exactly as the request declares it.

use std::sync::Arc;

use msgpair_protocol::{ClientRequest, DecodeError};
use tracing::{debug, info_span};
use uuid::Uuid;

use super::transport::{Transport, TransportError};

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client driver
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client over the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Encode `request`, exchange it, and decode the reply as `R::Response`.
    ///
    /// A malformed reply surfaces as [`ClientError::Decode`]; nothing is retried.
    pub fn send_and_await_response<R: ClientRequest>(&self, request: &R) -> ClientResult<R::Response> {
        let correlation_id = Uuid::new_v4();
        let span = info_span!("exchange", op = R::NAME, %correlation_id);
        let _guard = span.enter();

        let payload = request.encode();
        debug!(bytes = payload.len(), "sending request");

        let raw = self.transport.exchange(R::NAME, &payload)?;

        let response_type = R::response_type();
        debug!(
            bytes = raw.len(),
            response_type = response_type.type_name(),
            "decoding response"
        );
        Ok(response_type.decode(&raw)?)
    }
}
