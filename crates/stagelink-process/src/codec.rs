use crate::diagnostics::Context;
use crate::error::CodecError;
use crate::message::Message;

/// Converts between raw frame bytes and the message envelope.
///
/// One long-lived, stateless instance per deployed stage, selected at
/// construction time and reused for every message.
pub trait Codec {
    /// Payload type produced by `decode`.
    type In;
    /// Payload type consumed by `encode`.
    type Out;

    /// Parse raw frame bytes into an envelope.
    ///
    /// Any malformed structure is a [`CodecError::Decode`]; the loop drops
    /// the message and continues.
    fn decode(&self, bytes: &[u8], ctx: &Context<'_>) -> Result<Message<Self::In>, CodecError>;

    /// Encode an envelope into raw frame bytes.
    ///
    /// Expected to be total for well-formed messages. If it can fail anyway,
    /// the failure is a [`CodecError::Encode`] and handled with the same
    /// message-dropping policy as a decode failure.
    fn encode(&self, msg: &Message<Self::Out>, ctx: &Context<'_>) -> Result<Vec<u8>, CodecError>;

    /// Recognize the application-level shutdown payload ("poison pill").
    ///
    /// Evaluated on the raw bytes before `decode` is attempted, independent
    /// of the framing layer's own end-of-input detection.
    fn is_shutdown_signal(&self, bytes: &[u8]) -> bool;
}
