//! Order operation types.
//!
//! The selection travels as raw UTF-8 and the amount as decimal text.
//! `OrderResponse` deliberately has no `Encode` impl, which makes the whole
//! family usable by clients only.

use std::fmt;

use crate::codec::{decode_f64, decode_utf8, Decode, Encode};
use crate::error::DecodeError;
use crate::pair::{Message, Reply, Request, Response};

use super::names;
use super::prices::{price_of, UNLISTED_PRICE};

/// Order request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// What is being ordered, matched exactly against the price list.
    pub selection: String,
}

impl OrderRequest {
    /// Create an order for `selection`.
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
        }
    }
}

/// Order response payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderResponse {
    /// Amount billed for the order.
    pub amount: f64,
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order, selection: {}", self.selection)
    }
}

impl fmt::Display for OrderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "price of the bill is {}", self.amount)
    }
}

impl Message for OrderRequest {
    const NAME: &'static str = names::ORDER;
}

impl Request for OrderRequest {
    type Response = OrderResponse;
}

impl Encode for OrderRequest {
    fn encode(&self) -> Vec<u8> {
        self.selection.as_bytes().to_vec()
    }
}

impl Decode for OrderRequest {
    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_utf8(Self::NAME, raw).map(Self::new)
    }
}

impl Reply for OrderRequest {
    /// Unlisted selections are billed at `UNLISTED_PRICE`. That is the
    /// current default, not a business rule.
    fn reply(&self) -> OrderResponse {
        OrderResponse {
            amount: price_of(&self.selection).unwrap_or(UNLISTED_PRICE),
        }
    }
}

impl Message for OrderResponse {
    const NAME: &'static str = names::ORDER_RESPONSE;
}

impl Response for OrderResponse {
    type Request = OrderRequest;
}

impl Decode for OrderResponse {
    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let amount = decode_f64(Self::NAME, raw)?;
        Ok(Self { amount })
    }
}
