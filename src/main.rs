//! `kptrain` command-line tool
//!
//! ```bash
//! kptrain validate config.yaml --detailed
//! kptrain checkpoints runs/copyrnn-20240101-120000
//! ```

use clap::Parser;
use keyphrase_trainer::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
