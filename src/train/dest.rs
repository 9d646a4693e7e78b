//! Run directory and resume step

use std::fs;
use std::path::{Path, PathBuf};

use crate::checkpoint::parse_checkpoint_name;
use crate::config::TrainerConfig;
use crate::error::{Error, Result};

/// Directory for this run, created if needed
///
/// A resumed run reuses the directory of its checkpoint. A fresh run gets
/// `<dest_base_dir>/<name>-<YYYYmmdd-HHMMSS>`.
pub fn prepare_dest_dir(config: &TrainerConfig) -> Result<PathBuf> {
    let dir = match &config.training.train_from {
        Some(checkpoint) => resume_dir(checkpoint),
        None => {
            let mark = chrono::Local::now().format("%Y%m%d-%H%M%S");
            config.experiment.dest_base_dir.join(format!("{}-{mark}", config.experiment.name))
        }
    };
    fs::create_dir_all(&dir)
        .map_err(|e| Error::io(format!("creating run directory {}", dir.display()), e))?;
    Ok(dir)
}

fn resume_dir(checkpoint: &Path) -> PathBuf {
    match checkpoint.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Step the counter starts from
///
/// A fresh run always starts at 0. When resuming, an explicit `training.step`
/// wins over the step encoded in the checkpoint name; a name that carries no
/// step falls back to 0.
pub fn resume_step(config: &TrainerConfig) -> u64 {
    let Some(checkpoint) = config.training.train_from.as_deref() else {
        return 0;
    };
    config
        .training
        .step
        .or_else(|| parse_checkpoint_name(checkpoint).map(|id| id.step))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_dir_is_timestamped() {
        let base = tempfile::tempdir().unwrap();
        let config = TrainerConfig::default().with_name("copyrnn").with_dest_base_dir(base.path());

        let dir = prepare_dest_dir(&config).unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir.parent().unwrap(), base.path());

        let name = dir.file_name().unwrap().to_str().unwrap();
        let mark = name.strip_prefix("copyrnn-").unwrap();
        assert_eq!(mark.len(), "20240101-120000".len());
        assert_eq!(&mark[8..9], "-");
    }

    #[test]
    fn test_resume_reuses_checkpoint_dir() {
        let run = tempfile::tempdir().unwrap();
        let ckpt = run.path().join("copyrnn_epoch_2_batch_1500.model");
        let config = TrainerConfig::default().with_resume(&ckpt, None);

        assert_eq!(prepare_dest_dir(&config).unwrap(), run.path());
        assert_eq!(resume_step(&config), 1500);
    }

    #[test]
    fn test_explicit_step_wins() {
        let config = TrainerConfig::default().with_resume("r/x_epoch_1_batch_10.model", Some(7));
        assert_eq!(resume_step(&config), 7);
        assert_eq!(resume_step(&TrainerConfig::default()), 0);
    }

    #[test]
    fn test_step_without_checkpoint_is_ignored() {
        let mut config = TrainerConfig::default();
        config.training.step = Some(100);
        assert_eq!(resume_step(&config), 0);
    }

    #[test]
    fn test_dotted_checkpoint_name_resumes_at_its_step() {
        let config = TrainerConfig::default()
            .with_name("copyrnn.v2")
            .with_resume("runs/copyrnn.v2_epoch_1_batch_3.model", None);
        assert_eq!(resume_step(&config), 3);
    }

    #[test]
    fn test_bare_checkpoint_name_resumes_in_cwd() {
        assert_eq!(resume_dir(Path::new("x.model")), PathBuf::from("."));
    }
}
