//! Server driver.
//!
//! Decode, reply, encode. Transport hand-off happens in the caller, which
//! receives the encoded response bytes.

use msgpair_protocol::{MessageType, ServerRequest, ServerResponse};
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Handles requests of any server-usable message family.
#[derive(Debug, Clone, Default)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Decode `raw` as a `R`, reply to it and encode the response.
    ///
    /// Fails with [`ServerError::Decode`] if `raw` is not a valid `R`, and
    /// with [`ServerError::PayloadTooLarge`] if it exceeds the configured limit.
    pub fn handle_incoming_request<R>(
        &self,
        raw: &[u8],
        request_type: MessageType<R>,
    ) -> Result<Vec<u8>, ServerError>
    where
        R: ServerRequest,
        R::Response: ServerResponse,
    {
        if raw.len() > self.config.max_request_bytes {
            return Err(ServerError::PayloadTooLarge {
                size: raw.len(),
                max: self.config.max_request_bytes,
            });
        }

        let request = request_type.decode(raw)?;
        let response = self.handle_decoded_request(&request);
        Ok(self.send_response(&response))
    }

    /// Produce the reply for an already decoded request.
    pub fn handle_decoded_request<R: ServerRequest>(&self, request: &R) -> R::Response {
        let response_type = R::response_type();
        debug!(
            server = %self.config.name,
            op = R::NAME,
            response_type = response_type.type_name(),
            "handling request"
        );
        request.reply()
    }

    /// Encode an outgoing response.
    pub fn send_response<S: ServerResponse>(&self, response: &S) -> Vec<u8> {
        let encoded = response.encode();
        debug!(
            server = %self.config.name,
            op = S::NAME,
            bytes = encoded.len(),
            "sending response"
        );
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgpair_protocol::ops::{ProbeRequest, ProbeResponse, QuoteRequest, QuoteResponse};
    use msgpair_protocol::{Decode, DecodeError, Encode};

    fn create_server() -> Server {
        Server::new(ServerConfig::default())
    }

    #[test]
    fn test_probe_request() {
        let server = create_server();
        let encoded = server
            .handle_incoming_request(b"foo request data", MessageType::<ProbeRequest>::new())
            .unwrap();
        assert_eq!(ProbeResponse::decode(&encoded).unwrap(), ProbeResponse);
    }

    #[test]
    fn test_quote_request() {
        let server = create_server();
        let raw = QuoteRequest::new("many", 2).encode();
        let encoded = server
            .handle_incoming_request(&raw, MessageType::<QuoteRequest>::new())
            .unwrap();

        let response = QuoteResponse::decode(&encoded).unwrap();
        assert_eq!(response.total, 100.0);
        assert!(response.listed);
    }

    #[test]
    fn test_malformed_request() {
        let server = create_server();
        let result = server.handle_incoming_request(b"not json", MessageType::<QuoteRequest>::new());
        assert!(matches!(
            result,
            Err(ServerError::Decode(DecodeError::InvalidJson { message: "quote", .. }))
        ));
    }

    #[test]
    fn test_payload_too_large() {
        let server = Server::new(ServerConfig {
            max_request_bytes: 4,
            ..ServerConfig::default()
        });
        let result = server.handle_incoming_request(b"12345", MessageType::<ProbeRequest>::new());
        assert!(matches!(
            result,
            Err(ServerError::PayloadTooLarge { size: 5, max: 4 })
        ));
    }

    #[test]
    fn test_handle_decoded_request_replies() {
        let server = create_server();
        let response = server.handle_decoded_request(&QuoteRequest::new("water", 1));
        assert!(!response.listed);
        assert_eq!(response.unit_price, 0.0);
    }

    #[test]
    fn test_send_response_encodes() {
        let server = create_server();
        assert_eq!(server.send_response(&ProbeResponse), b"probe.response");
    }
}
