//! msgpair - statically paired request/response messages
//!
//! Each request type is bound to exactly one response type, and the role a
//! message can play (client sender, server handler) is checked by the
//! compiler from the capabilities of both halves of the pair. This crate
//! holds the client side and the CLI; the contracts and message families
//! live in `msgpair-protocol`, the server driver in `msgpair-server`.

pub mod config;
pub mod host;

pub use config::{CliOverrides, Config, ConfigError};
pub use host::{CannedTransport, Client, ClientError, LoopbackTransport, Transport, TransportError};
pub use msgpair_protocol as protocol;
pub use msgpair_server as server;
