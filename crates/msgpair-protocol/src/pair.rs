//! Message-pair binding.
//!
//! Every request type names exactly one response type, and that response
//! type names the request back. The link lives in associated types, so it
//! is fixed when the types are defined and cannot disagree: an impl whose
//! response points at a different request does not compile.

use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;

use crate::codec::Decode;
use crate::error::DecodeError;

/// Common identity of every request and response type.
pub trait Message: Sized + 'static {
    /// Stable operation name, used for routing and diagnostics.
    const NAME: &'static str;
}

/// An outbound call, bound to the single response type it produces.
pub trait Request: Message {
    /// The response paired with this request.
    type Response: Response<Request = Self>;

    /// The declared response type.
    fn response_type() -> MessageType<Self::Response> {
        MessageType::new()
    }
}

/// The result of handling a request, bound to the single request type it answers.
pub trait Response: Message {
    /// The request paired with this response.
    type Request: Request<Response = Self>;

    /// The declared request type.
    fn request_type() -> MessageType<Self::Request> {
        MessageType::new()
    }
}

/// Request-handling logic: build the paired response from a decoded request.
///
/// Implementations are pure functions of the request's fields.
pub trait Reply: Request {
    /// Produce the response for this request.
    fn reply(&self) -> Self::Response;
}

/// A zero-sized handle to a message type.
///
/// Handles compare equal exactly when they name the same Rust type, even
/// when their type parameters are spelled differently.
pub struct MessageType<M>(PhantomData<fn() -> M>);

impl<M: 'static> MessageType<M> {
    /// Handle for `M`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Fully qualified Rust type name.
    pub fn type_name(&self) -> &'static str {
        type_name::<M>()
    }

    /// Runtime identity of `M`.
    pub fn id(&self) -> TypeId {
        TypeId::of::<M>()
    }
}

impl<M: Message> MessageType<M> {
    /// Operation name declared by `M`.
    pub fn name(&self) -> &'static str {
        M::NAME
    }
}

impl<M: Request> MessageType<M> {
    /// The response type paired with request type `M`.
    pub fn response_type(&self) -> MessageType<M::Response> {
        M::response_type()
    }
}

impl<M: Response> MessageType<M> {
    /// The request type paired with response type `M`.
    pub fn request_type(&self) -> MessageType<M::Request> {
        M::request_type()
    }
}

impl<M: Decode> MessageType<M> {
    /// Decode `raw` into an instance of `M`.
    pub fn decode(&self, raw: &[u8]) -> Result<M, DecodeError> {
        M::decode(raw)
    }
}

impl<M> Clone for MessageType<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for MessageType<M> {}

impl<M: 'static> Default for MessageType<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: 'static, N: 'static> PartialEq<MessageType<N>> for MessageType<M> {
    fn eq(&self, _other: &MessageType<N>) -> bool {
        TypeId::of::<M>() == TypeId::of::<N>()
    }
}

impl<M: 'static> Eq for MessageType<M> {}

impl<M: 'static> fmt::Debug for MessageType<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MessageType").field(&self.type_name()).finish()
    }
}

impl<M: 'static> fmt::Display for MessageType<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
