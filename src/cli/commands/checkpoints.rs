//! `kptrain checkpoints`

use std::path::Path;

use crate::checkpoint::{list_checkpoints, load_state, CheckpointEntry};
use crate::cli::CheckpointsArgs;
use crate::error::Result;

/// One line per checkpoint plus a resume hint for the latest
pub fn format_listing(dir: &Path, entries: &[CheckpointEntry]) -> Result<String> {
    let Some(latest) = entries.last() else {
        return Ok(format!("No checkpoints in {}", dir.display()));
    };

    let mut lines = Vec::with_capacity(entries.len() + 2);
    for entry in entries {
        let best = match load_state(&entry.paths)? {
            Some(state) => match state.best_score {
                Some(score) => format!("best {score:.4} @ step {}", state.best_step),
                None => "no evaluation".to_string(),
            },
            None => "-".to_string(),
        };
        lines.push(format!(
            "epoch {:>3}  step {:>8}  {}  {}",
            entry.id.epoch,
            entry.id.step,
            entry.paths.stem(),
            best
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "resume with: training.train_from: {}  training.step: {}",
        latest.paths.model().display(),
        latest.id.step
    ));
    Ok(lines.join("\n"))
}

pub fn run_checkpoints(args: &CheckpointsArgs) -> Result<()> {
    let entries = list_checkpoints(&args.dir, args.exp.as_deref())?;
    println!("{}", format_listing(&args.dir, &entries)?);
    Ok(())
}
