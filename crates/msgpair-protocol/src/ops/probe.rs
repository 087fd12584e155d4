//! Probe operation types.
//!
//! A payload-free exchange, usable by both clients and servers.

use std::fmt;

use crate::codec::{Decode, Encode};
use crate::error::DecodeError;
use crate::pair::{Message, Reply, Request, Response};

use super::names;

/// Probe request (no payload).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeRequest;

/// Probe response (no payload).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResponse;

impl fmt::Display for ProbeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("probe request")
    }
}

impl fmt::Display for ProbeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("probe response")
    }
}

impl Message for ProbeRequest {
    const NAME: &'static str = names::PROBE;
}

impl Request for ProbeRequest {
    type Response = ProbeResponse;
}

impl Encode for ProbeRequest {
    fn encode(&self) -> Vec<u8> {
        names::PROBE.as_bytes().to_vec()
    }
}

impl Decode for ProbeRequest {
    // Nothing to validate: any payload is a probe.
    fn decode(_raw: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}

impl Reply for ProbeRequest {
    fn reply(&self) -> ProbeResponse {
        ProbeResponse
    }
}

impl Message for ProbeResponse {
    const NAME: &'static str = names::PROBE_RESPONSE;
}

impl Response for ProbeResponse {
    type Request = ProbeRequest;
}

impl Encode for ProbeResponse {
    fn encode(&self) -> Vec<u8> {
        names::PROBE_RESPONSE.as_bytes().to_vec()
    }
}

impl Decode for ProbeResponse {
    fn decode(_raw: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}
