use clap::{Args, Subcommand};

use crate::exit::CliResult;

pub mod run;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demo character-count stage over stdin/stdout.
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Process name used to prefix diagnostic lines.
    #[arg(long, default_value = "char-count")]
    pub name: String,
}

pub fn run(command: Command) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args),
    }
}
