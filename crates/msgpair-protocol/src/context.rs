//! Context contracts.
//!
//! Each contract combines capabilities on a message with capabilities on
//! the message it is paired with. They are blanket-implemented, so any
//! type whose capabilities line up conforms automatically and any type
//! whose capabilities do not is rejected at compile time:
//!
//! | Contract         | On the message             | On the paired message |
//! |------------------|----------------------------|-----------------------|
//! | `ClientRequest`  | `Encode`                   | `Decode`              |
//! | `ClientResponse` | `Decode`                   | `Encode`              |
//! | `ServerRequest`  | `Decode`, `Reply`          | `Encode`              |
//! | `ServerResponse` | `Encode`                   | `Decode`              |
//!
//! An order can be decoded and replied to, but its response has no
//! encoding, so it is not a server request:
//!
//! ```compile_fail
//! use msgpair_protocol::{ops::OrderRequest, ServerRequest};
//!
//! fn server_usable<R: ServerRequest>() {}
//! server_usable::<OrderRequest>();
//! ```
//!
//! Nor is its response a server response:
//!
//! ```compile_fail
//! use msgpair_protocol::{ops::OrderResponse, ServerResponse};
//!
//! fn server_usable<R: ServerResponse>() {}
//! server_usable::<OrderResponse>();
//! ```
//!
//! Both are fine on the client side:
//!
//! ```
//! use msgpair_protocol::ops::{OrderRequest, OrderResponse};
//! use msgpair_protocol::{ClientRequest, ClientResponse};
//!
//! fn client_usable<Req: ClientRequest, Resp: ClientResponse>() {}
//! client_usable::<OrderRequest, OrderResponse>();
//! ```

use crate::codec::{Decode, Encode};
use crate::pair::{Reply, Request, Response};

/// A request that can be sent by a client: it encodes, and its response decodes.
pub trait ClientRequest: Request<Response: Decode> + Encode {}

impl<T> ClientRequest for T where T: Request<Response: Decode> + Encode {}

/// A response a client can receive: it decodes, and its request encodes.
pub trait ClientResponse: Response<Request: Encode> + Decode {}

impl<T> ClientResponse for T where T: Response<Request: Encode> + Decode {}

/// A request a server can handle: it decodes, replies, and its response encodes.
pub trait ServerRequest: Request<Response: Encode> + Decode + Reply {}

impl<T> ServerRequest for T where T: Request<Response: Encode> + Decode + Reply {}

/// A response a server can send: it encodes, and its request decodes.
pub trait ServerResponse: Response<Request: Decode> + Encode {}

impl<T> ServerResponse for T where T: Response<Request: Decode> + Encode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{OrderRequest, OrderResponse, ProbeRequest, ProbeResponse, QuoteRequest, QuoteResponse};

    fn client_request<R: ClientRequest>() {}
    fn client_response<R: ClientResponse>() {}
    fn server_request<R: ServerRequest>() {}
    fn server_response<R: ServerResponse>() {}

    #[test]
    fn test_symmetric_families_satisfy_every_contract() {
        client_request::<ProbeRequest>();
        client_response::<ProbeResponse>();
        server_request::<ProbeRequest>();
        server_response::<ProbeResponse>();

        client_request::<QuoteRequest>();
        client_response::<QuoteResponse>();
        server_request::<QuoteRequest>();
        server_response::<QuoteResponse>();
    }

    #[test]
    fn test_order_family_is_client_only() {
        client_request::<OrderRequest>();
        client_response::<OrderResponse>();
    }

    #[test]
    fn test_server_request_response_is_encodable() {
        fn encode_reply<R: ServerRequest>(request: &R) -> Vec<u8> {
            request.reply().encode()
        }

        assert_eq!(encode_reply(&ProbeRequest), b"probe.response".to_vec());
    }

    #[test]
    fn test_client_request_response_is_decodable() {
        fn decode_for<R: ClientRequest>(raw: &[u8]) -> R::Response {
            R::Response::decode(raw).unwrap()
        }

        assert_eq!(decode_for::<OrderRequest>(b"1.95"), OrderResponse { amount: 1.95 });
    }
}
