//! msgpair Server
//!
//! Decodes incoming requests, obtains their replies and encodes the
//! outgoing responses. Every entry point is bounded by the server-side
//! context contracts, so a message family that cannot be served is
//! rejected by the compiler rather than failing mid-request:
//!
//! ```compile_fail
//! use msgpair_protocol::{ops::OrderRequest, MessageType};
//! use msgpair_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! // OrderResponse cannot be encoded, so orders cannot be served.
//! let _ = server.handle_incoming_request(b"beer", MessageType::<OrderRequest>::new());
//! ```
//!
//! ```compile_fail
//! use msgpair_protocol::ops::OrderRequest;
//! use msgpair_server::Router;
//!
//! let _ = Router::standard().route::<OrderRequest>();
//! ```
//!
//! Served families work as expected:
//!
//! ```
//! use msgpair_protocol::{ops::ProbeRequest, MessageType};
//! use msgpair_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! let encoded = server
//!     .handle_incoming_request(b"foo request data", MessageType::<ProbeRequest>::new())
//!     .unwrap();
//! assert_eq!(encoded, b"probe.response");
//! ```

pub mod config;
pub mod error;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerError;
pub use router::Router;
pub use server::Server;
