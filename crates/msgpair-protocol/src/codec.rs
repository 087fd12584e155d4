//! Capability contracts: turning a message into bytes and back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DecodeError;

/// A message that can produce its wire representation.
///
/// Encoding is deterministic in the message's field values and has no side
/// effects beyond producing the bytes.
pub trait Encode {
    /// Encode this message into a byte sequence.
    fn encode(&self) -> Vec<u8>;
}

/// A message that can be constructed from its wire representation.
pub trait Decode: Sized {
    /// Build a fully-initialized message from `raw`.
    fn decode(raw: &[u8]) -> Result<Self, DecodeError>;
}

/// Interpret `raw` as UTF-8 text on behalf of `message`.
pub fn decode_utf8<'a>(message: &'static str, raw: &'a [u8]) -> Result<&'a str, DecodeError> {
    std::str::from_utf8(raw).map_err(|source| DecodeError::InvalidUtf8 { message, source })
}

/// Parse `raw` as decimal text into an `f64` on behalf of `message`.
///
/// Surrounding whitespace is ignored.
pub fn decode_f64(message: &'static str, raw: &[u8]) -> Result<f64, DecodeError> {
    let text = decode_utf8(message, raw)?.trim();
    text.parse::<f64>().map_err(|source| DecodeError::InvalidNumber {
        message,
        raw: text.to_string(),
        source,
    })
}

/// Serialize `value` as a compact JSON document.
///
/// Derived `Serialize` impls over plain fields cannot fail. A custom impl
/// that does fail yields an empty payload, which [`decode_json`] rejects.
pub fn encode_json<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}

/// Deserialize a JSON document from `raw` on behalf of `message`.
pub fn decode_json<T: DeserializeOwned>(message: &'static str, raw: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(raw).map_err(|e| DecodeError::InvalidJson {
        message,
        reason: e.to_string(),
    })
}
