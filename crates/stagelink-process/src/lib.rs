//! Process loop and message contracts for external dataflow stages.
//!
//! This is the layer that turns a pair of byte channels into a pipeline
//! stage. A [`Stage`] pulls frames from the inbound channel, hands them to a
//! pluggable [`Codec`] and [`Computation`], and pushes the results to the
//! outbound channel, one message at a time, until the host engine closes the
//! channel or sends a shutdown signal.

pub mod codec;
pub mod computation;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod message;
pub mod stage;

pub use codec::Codec;
pub use computation::Computation;
pub use config::StageConfig;
pub use diagnostics::{Context, Diagnostics};
pub use error::{CodecError, ComputationError, ConfigError, FatalError};
pub use message::Message;
pub use stage::{ProcessState, RunSummary, Stage};
