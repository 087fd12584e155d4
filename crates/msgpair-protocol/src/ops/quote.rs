//! Quote operation types.
//!
//! Prices a quantity of a selection. Both directions travel as JSON, so the
//! family is usable by clients and servers alike.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{decode_json, encode_json, Decode, Encode};
use crate::error::DecodeError;
use crate::pair::{Message, Reply, Request, Response};

use super::names;
use super::prices::{price_of, UNLISTED_PRICE};

/// Quote request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteRequest {
    /// What is being quoted.
    pub selection: String,
    /// How many units.
    pub quantity: u32,
}

impl QuoteRequest {
    /// Create a quote request.
    pub fn new(selection: impl Into<String>, quantity: u32) -> Self {
        Self {
            selection: selection.into(),
            quantity,
        }
    }
}

/// Quote response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteResponse {
    /// Echo of the quoted selection.
    pub selection: String,
    /// Price of one unit (0.0 when unlisted).
    pub unit_price: f64,
    /// Echo of the quoted quantity.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub total: f64,
    /// Whether the selection is on the price list.
    pub listed: bool,
}

impl fmt::Display for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quote for {} x {}", self.quantity, self.selection)
    }
}

impl fmt::Display for QuoteResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} at {} comes to {}",
            self.quantity, self.selection, self.unit_price, self.total
        )?;
        if !self.listed {
            f.write_str(" (unlisted)")?;
        }
        Ok(())
    }
}

impl Message for QuoteRequest {
    const NAME: &'static str = names::QUOTE;
}

impl Request for QuoteRequest {
    type Response = QuoteResponse;
}

impl Encode for QuoteRequest {
    fn encode(&self) -> Vec<u8> {
        encode_json(self)
    }
}

impl Decode for QuoteRequest {
    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_json(Self::NAME, raw)
    }
}

impl Reply for QuoteRequest {
    fn reply(&self) -> QuoteResponse {
        let listed = price_of(&self.selection);
        let unit_price = listed.unwrap_or(UNLISTED_PRICE);
        QuoteResponse {
            selection: self.selection.clone(),
            unit_price,
            quantity: self.quantity,
            total: unit_price * f64::from(self.quantity),
            listed: listed.is_some(),
        }
    }
}

impl Message for QuoteResponse {
    const NAME: &'static str = names::QUOTE_RESPONSE;
}

impl Response for QuoteResponse {
    type Request = QuoteRequest;
}

impl Encode for QuoteResponse {
    fn encode(&self) -> Vec<u8> {
        encode_json(self)
    }
}

impl Decode for QuoteResponse {
    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_json(Self::NAME, raw)
    }
}
