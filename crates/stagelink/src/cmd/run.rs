use std::io;

use stagelink::demo::{CharCount, CommaDelimitedCodec};
use stagelink::process::{Stage, StageConfig};

use crate::cmd::RunArgs;
use crate::exit::{config_error, fatal_error, CliResult, SUCCESS};

pub fn run(args: RunArgs) -> CliResult<i32> {
    let stage = Stage::new(StageConfig {
        computation: Some(CharCount),
        codec: Some(CommaDelimitedCodec),
        name: Some(args.name),
        ..StageConfig::default()
    })
    .map_err(config_error)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let summary = stage
        .run(stdin, stdout)
        .map_err(|err| fatal_error("stage failed", err))?;

    tracing::info!(
        received = summary.received,
        processed = summary.processed,
        "stage completed"
    );
    Ok(SUCCESS)
}
