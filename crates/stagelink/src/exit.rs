use std::fmt;

use stagelink_frame::FrameError;
use stagelink_process::{ConfigError, FatalError};

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn config_error(err: ConfigError) -> CliError {
    CliError::new(USAGE, err.to_string())
}

pub fn fatal_error(context: &str, err: FatalError) -> CliError {
    let code = match &err {
        FatalError::Inbound(FrameError::Truncated { .. })
        | FatalError::Inbound(FrameError::PayloadTooLarge { .. }) => DATA_INVALID,
        FatalError::Inbound(FrameError::Io(_))
        | FatalError::Outbound(FrameError::Io(_))
        | FatalError::Outbound(FrameError::Closed) => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}
