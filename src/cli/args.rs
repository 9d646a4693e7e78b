//! Argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keyphrase trainer utilities
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "kptrain")]
#[command(version)]
#[command(about = "Configuration, checkpoint and dataset tools for keyphrase model training")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// List checkpoints in a run directory
    Checkpoints(CheckpointsArgs),

    /// Keep only the first N records of a JSON-lines dataset
    Truncate(TruncateArgs),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Print a configuration summary
    #[arg(short, long)]
    pub detailed: bool,

    /// Also check that data and resume paths exist
    #[arg(long)]
    pub check_paths: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckpointsArgs {
    /// Run directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only list checkpoints of this experiment
    #[arg(long)]
    pub exp: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TruncateArgs {
    /// JSON-lines dataset
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of records to keep
    #[arg(short = 'n', long)]
    pub count: usize,

    /// Write here instead of replacing the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse from an explicit argument list
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
