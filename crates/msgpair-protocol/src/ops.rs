//! Operation-specific message families.

pub mod order;
pub mod prices;
pub mod probe;
pub mod quote;

pub use order::{OrderRequest, OrderResponse};
pub use probe::{ProbeRequest, ProbeResponse};
pub use quote::{QuoteRequest, QuoteResponse};

/// Known operation names.
pub mod names {
    pub const PROBE: &str = "probe";
    pub const PROBE_RESPONSE: &str = "probe.response";
    pub const ORDER: &str = "order";
    pub const ORDER_RESPONSE: &str = "order.response";
    pub const QUOTE: &str = "quote";
    pub const QUOTE_RESPONSE: &str = "quote.response";
}
