use stagelink_process::{Codec, CodecError, Context, Message};

/// Payload the host sends as the application-level poison pill.
pub const SHUTDOWN_PAYLOAD: &[u8] = b"SHUTDOWN";

const FIELD_COUNT: usize = 5;
const SEPARATOR: char = ',';

/// Comma-separated text encoding of the envelope: exactly five fields in
/// order `id,source_ts,last_ingress_ts,sent_to_external_ts,data`. The data
/// field itself must not contain the separator.
pub struct CommaDelimitedCodec;

impl Codec for CommaDelimitedCodec {
    type In = String;
    type Out = String;

    fn decode(&self, bytes: &[u8], _ctx: &Context<'_>) -> Result<Message<String>, CodecError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|err| CodecError::Decode(format!("payload is not UTF-8: {err}")))?;

        let mut fields = text.splitn(FIELD_COUNT, SEPARATOR);
        let mut next = |name: &str| {
            fields
                .next()
                .ok_or_else(|| CodecError::Decode(format!("missing field: {name}")))
        };

        let id = next("id")?.to_string();
        let source_ts = next("source_ts")?.to_string();
        let last_ingress_ts = next("last_ingress_ts")?.to_string();
        let sent_to_external_ts = next("sent_to_external_ts")?.to_string();
        let data = next("data")?;

        if data.contains(SEPARATOR) {
            return Err(CodecError::Decode(format!(
                "expected exactly {FIELD_COUNT} fields"
            )));
        }

        Ok(Message {
            id,
            source_ts,
            last_ingress_ts,
            sent_to_external_ts,
            data: data.to_string(),
        })
    }

    fn encode(&self, msg: &Message<String>, _ctx: &Context<'_>) -> Result<Vec<u8>, CodecError> {
        if msg.data.contains(SEPARATOR) {
            return Err(CodecError::Encode(
                "data must not contain the field separator".to_string(),
            ));
        }
        Ok(format!(
            "{},{},{},{},{}",
            msg.id, msg.source_ts, msg.last_ingress_ts, msg.sent_to_external_ts, msg.data
        )
        .into_bytes())
    }

    fn is_shutdown_signal(&self, bytes: &[u8]) -> bool {
        bytes == SHUTDOWN_PAYLOAD
    }
}
