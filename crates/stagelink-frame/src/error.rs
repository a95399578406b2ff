/// Errors that can occur while reading or writing frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The stream ended after a frame header started but before the full
    /// payload arrived. Frame alignment is lost and cannot be recovered.
    #[error("stream closed mid-frame ({buffered} bytes buffered)")]
    Truncated { buffered: usize },

    /// The length header announces a payload larger than the configured
    /// maximum. Indistinguishable from stream corruption, so not recoverable.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream stopped accepting bytes while a frame was being written.
    #[error("stream closed while writing frame")]
    Closed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
