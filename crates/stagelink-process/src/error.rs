use stagelink_frame::FrameError;

/// Per-message codec failures. Recoverable: the loop logs the error, drops
/// the message, and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload does not match the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A decode-successful message could not be encoded.
    #[error("encode failed: {0}")]
    Encode(String),
}

/// A computation failed unexpectedly on one message. Recoverable: the loop
/// logs the error, drops the message, and keeps running.
#[derive(Debug, thiserror::Error)]
#[error("computation failed: {0}")]
pub struct ComputationError(String);

impl ComputationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Stage construction failures, detected before any channel I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required configuration component was not supplied.
    #[error("missing required component: {0}")]
    Missing(&'static str),

    /// The process name is present but empty.
    #[error("process name must not be empty")]
    EmptyName,
}

/// Channel-level failures that end the run immediately, bypassing the
/// orderly shutdown sequence. The host engine's supervision is the recovery
/// mechanism.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// The inbound channel lost frame alignment or failed at the I/O layer.
    #[error("inbound channel failed: {0}")]
    Inbound(#[source] FrameError),

    /// The outbound channel failed to accept or flush a frame.
    #[error("outbound channel failed: {0}")]
    Outbound(#[source] FrameError),
}
