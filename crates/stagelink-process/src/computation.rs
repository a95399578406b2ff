use crate::diagnostics::Context;
use crate::error::ComputationError;

/// The transformation a stage applies to each message payload.
///
/// Implementations should be pure and deterministic. The context grants
/// only diagnostic logging — never access to the channels or counters.
pub trait Computation {
    /// Payload type this computation accepts.
    type In;
    /// Payload type this computation produces.
    type Out;

    /// Transform one payload.
    ///
    /// An unexpected failure is a [`ComputationError`]; the loop logs it,
    /// drops the message, and emits no output frame for that input.
    fn execute(&self, input: &Self::In, ctx: &Context<'_>) -> Result<Self::Out, ComputationError>;
}
