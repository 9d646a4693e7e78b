//! `kptrain init`

use tracing::info;

use crate::cli::InitArgs;
use crate::config::{save_config, TrainerConfig};
use crate::error::{Error, Result};

pub fn run_init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    save_config(&TrainerConfig::default(), &args.path)?;
    info!("wrote default configuration to {}", args.path.display());
    println!("Created {}", args.path.display());
    Ok(())
}
