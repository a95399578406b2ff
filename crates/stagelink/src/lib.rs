//! Run an external computation as one stage of a streaming dataflow pipeline.
//!
//! The host engine launches this process with two pre-connected byte
//! channels (inbound and outbound, typically stdin/stdout) and exchanges
//! length-prefixed frames over them. stagelink supplies the framing, the
//! message lifecycle, and the process loop; deployments supply a codec and
//! a computation.
//!
//! # Crate Structure
//!
//! - [`frame`] — Length-prefixed framing (reader, writer, wire codec)
//! - [`process`] — Message envelope, codec/computation contracts, process loop
//! - [`demo`] — Reference comma-delimited codec and character-count computation

/// Re-export frame types.
pub mod frame {
    pub use stagelink_frame::*;
}

/// Re-export process types.
pub mod process {
    pub use stagelink_process::*;
}

pub mod demo;
