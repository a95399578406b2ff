//! Reference codec and computation for demonstration deployments.
//!
//! Neither is part of the adapter core: they exist so a stage can be wired
//! up end to end without writing any application code.

mod char_count;
mod codec;

pub use char_count::CharCount;
pub use codec::{CommaDelimitedCodec, SHUTDOWN_PAYLOAD};
