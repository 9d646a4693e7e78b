//! Command-line interface for `kptrain`
//!
//! ```bash
//! kptrain validate config.yaml --detailed --check-paths
//! kptrain init config.yaml
//! kptrain checkpoints runs/copyrnn-20240101-120000 --exp copyrnn
//! kptrain truncate data/kp20k_train.jsonl --count 1000 --output data/small.jsonl
//! ```

mod args;
mod commands;

pub use args::{parse_args, CheckpointsArgs, Cli, Command, InitArgs, TruncateArgs, ValidateArgs};
pub use commands::{run_command, truncate_jsonl};
