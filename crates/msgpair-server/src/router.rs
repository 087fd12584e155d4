//! Operation router.
//!
//! Routes incoming raw requests to the server driver by operation name.
//! Only server-usable request types can be registered.

use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};

use msgpair_protocol::ops::{ProbeRequest, QuoteRequest};
use msgpair_protocol::{MessageType, ServerRequest, ServerResponse};
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::Server;

type Handler = Box<dyn Fn(&Server, &[u8]) -> Result<Vec<u8>, ServerError> + Send + Sync>;

/// Dispatches raw requests to typed handlers.
pub struct Router {
    server: Server,
    routes: HashMap<&'static str, Handler>,
}

impl Router {
    /// Create a router with no registered operations.
    pub fn new(server: Server) -> Self {
        Self {
            server,
            routes: HashMap::new(),
        }
    }

    /// Router serving every server-usable family, with default configuration.
    pub fn standard() -> Self {
        Self::with_standard_routes(Server::new(ServerConfig::default()))
    }

    /// Router serving every server-usable family on `server`.
    pub fn with_standard_routes(server: Server) -> Self {
        Self::new(server)
            .route::<ProbeRequest>()
            .route::<QuoteRequest>()
    }

    /// Register `R` under its operation name, replacing any previous handler.
    pub fn route<R>(mut self) -> Self
    where
        R: ServerRequest,
        R::Response: ServerResponse,
    {
        let handler: Handler = Box::new(|server: &Server, raw: &[u8]| {
            server.handle_incoming_request(raw, MessageType::<R>::new())
        });
        if self.routes.insert(R::NAME, handler).is_some() {
            warn!(op = R::NAME, "replacing existing route");
        }
        self
    }

    /// The underlying server driver.
    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Whether `op` has a registered handler.
    pub fn serves(&self, op: &str) -> bool {
        self.routes.contains_key(op)
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> Vec<&'static str> {
        let mut ops: Vec<_> = self.routes.keys().copied().collect();
        ops.sort_unstable();
        ops
    }

    /// Dispatch a raw request for `op` and return the encoded response.
    pub fn dispatch(&self, op: &str, raw: &[u8]) -> Result<Vec<u8>, ServerError> {
        let handler = self
            .routes
            .get(op)
            .ok_or_else(|| ServerError::UnknownOperation(op.to_string()))?;
        debug!(op, bytes = raw.len(), "dispatching request");
        handler(&self.server, raw)
    }

    /// Read one raw request for `op` from `reader` until EOF, write the
    /// encoded response to `writer`.
    pub fn serve_io<R: Read, W: Write>(
        &self,
        op: &str,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), ServerError> {
        let max = self.server.config().max_request_bytes;
        let mut raw = Vec::new();
        // One byte past the limit is enough to detect an oversized request.
        reader.take((max as u64).saturating_add(1)).read_to_end(&mut raw)?;

        let encoded = self.dispatch(op, &raw)?;
        writer.write_all(&encoded)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("server", &self.server)
            .field("operations", &self.operations())
            .finish()
    }
}
