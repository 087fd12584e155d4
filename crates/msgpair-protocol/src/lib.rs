//! msgpair Protocol Types
//!
//! Defines the capability contracts a message type can satisfy, the
//! compile-time pairing between a request type and its response type, and
//! the context contracts (client-side, server-side) built from both.
//!
//! A driver only ever names a context contract in its bounds. Whether a
//! concrete message type may be used there is decided by the compiler:
//!
//! ```
//! use msgpair_protocol::{ops::ProbeRequest, ClientRequest, ServerRequest};
//!
//! fn client_usable<R: ClientRequest>() {}
//! fn server_usable<R: ServerRequest>() {}
//!
//! client_usable::<ProbeRequest>();
//! server_usable::<ProbeRequest>();
//! ```

pub mod codec;
pub mod context;
pub mod error;
pub mod ops;
pub mod pair;

pub use codec::{Decode, Encode};
pub use context::{ClientRequest, ClientResponse, ServerRequest, ServerResponse};
pub use error::DecodeError;
pub use pair::{Message, MessageType, Reply, Request, Response};
