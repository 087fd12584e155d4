//! Client-Side Components
//!
//! Implements the client driver and the transports it sends through.

pub mod client;
pub mod transport;

pub use client::{Client, ClientError, ClientResult};
pub use transport::{CannedTransport, LoopbackTransport, Transport, TransportError, DEFAULT_CANNED_RESPONSE};
