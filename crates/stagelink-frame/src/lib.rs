//! Length-prefixed message framing for external dataflow stages.
//!
//! The host engine and the external process exchange discrete frames over
//! plain byte streams. Every frame is:
//! - A 4-byte big-endian payload length
//! - Exactly that many payload bytes
//!
//! No magic, no separators, no trailer. No partial reads, no buffer
//! management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
