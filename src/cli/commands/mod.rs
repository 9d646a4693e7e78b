//! Command implementations

mod checkpoints;
mod init;
mod truncate;
mod validate;

pub use truncate::truncate_jsonl;

use super::{Cli, Command};
use crate::error::Result;
use crate::logging::init_cli_tracing;

/// Execute a parsed command line
pub fn run_command(cli: Cli) -> Result<()> {
    init_cli_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate(args) => validate::run_validate(&args),
        Command::Init(args) => init::run_init(&args),
        Command::Checkpoints(args) => checkpoints::run_checkpoints(&args),
        Command::Truncate(args) => truncate::run_truncate(&args),
    }
}
