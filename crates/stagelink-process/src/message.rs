/// The envelope carried end to end through the stage.
///
/// The identifier and the three pipeline timestamps are kept as text: the
/// host engine's native values are unsigned 64-bit and would lose precision
/// in languages whose widest integer is a signed 64-bit — the adapter treats
/// them as opaque pass-through tokens and never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<T> {
    /// Opaque message identifier assigned by the host engine.
    pub id: String,
    /// When the message entered the pipeline at its source.
    pub source_ts: String,
    /// When the message last crossed an ingress boundary.
    pub last_ingress_ts: String,
    /// When the host engine handed the message to this external process.
    pub sent_to_external_ts: String,
    /// The payload this stage transforms.
    pub data: T,
}

impl<T> Message<T> {
    /// Derive the outbound message for a computed result.
    ///
    /// The envelope fields are immutable pass-through: the derived message
    /// copies them unchanged and only replaces `data`.
    pub fn with_result<S>(&self, result: S) -> Message<S> {
        Message {
            id: self.id.clone(),
            source_ts: self.source_ts.clone(),
            last_ingress_ts: self.last_ingress_ts.clone(),
            sent_to_external_ts: self.sent_to_external_ts.clone(),
            data: result,
        }
    }
}
