//! Checkpoint files
//!
//! Every save writes three files into the run directory:
//!
//! - `<exp>_epoch_<e>_batch_<s>.model`: parameter snapshot, written by the model
//! - `<exp>_epoch_<e>_batch_<s>.json`: configuration snapshot
//! - `<exp>_epoch_<e>_batch_<s>.state.json`: training state at save time
//!
//! Checkpoints are never pruned.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::TrainerConfig;
use crate::error::{Error, Result};
use crate::model::Model;
use crate::train::TrainingState;

const MODEL_EXT: &str = ".model";
const CONFIG_EXT: &str = ".json";
const STATE_EXT: &str = ".state.json";

/// Epoch and step encoded in a checkpoint file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CheckpointId {
    pub epoch: usize,
    pub step: u64,
}

/// File locations of one checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointPaths {
    dir: PathBuf,
    stem: String,
}

impl CheckpointPaths {
    /// Paths for experiment `exp` at `(epoch, step)` inside `dir`
    pub fn new(dir: impl Into<PathBuf>, exp: &str, epoch: usize, step: u64) -> Self {
        Self { dir: dir.into(), stem: format!("{exp}_epoch_{epoch}_batch_{step}") }
    }

    /// Shared file stem
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Parameter snapshot
    pub fn model(&self) -> PathBuf {
        self.dir.join(format!("{}{MODEL_EXT}", self.stem))
    }

    /// Configuration snapshot
    pub fn config(&self) -> PathBuf {
        self.dir.join(format!("{}{CONFIG_EXT}", self.stem))
    }

    /// Training state sidecar
    pub fn state(&self) -> PathBuf {
        self.dir.join(format!("{}{STATE_EXT}", self.stem))
    }
}

/// Write model parameters, configuration and training state
///
/// The three writes are independent; a failure part-way leaves the earlier
/// files in place.
pub fn save_checkpoint<M: Model + ?Sized>(
    model: &M,
    config: &TrainerConfig,
    state: &TrainingState,
    paths: &CheckpointPaths,
) -> Result<()> {
    model.save_parameters(&paths.model())?;

    let config_path = paths.config();
    fs::write(&config_path, config.to_json_pretty()?)
        .map_err(|e| Error::io(format!("writing {}", config_path.display()), e))?;

    let state_path = paths.state();
    fs::write(&state_path, serde_json::to_string_pretty(state)?)
        .map_err(|e| Error::io(format!("writing {}", state_path.display()), e))?;

    Ok(())
}

/// Read the training state sidecar of a checkpoint, if one was written
pub fn load_state(paths: &CheckpointPaths) -> Result<Option<TrainingState>> {
    let path = paths.state();
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
    Ok(Some(serde_json::from_str(&text)?))
}

/// Parse `<exp>_epoch_<e>_batch_<s>` plus one of the checkpoint extensions
///
/// The experiment name may itself contain dots.
pub fn parse_checkpoint_name(path: &Path) -> Option<CheckpointId> {
    let name = path.file_name()?.to_str()?;
    let stem = checkpoint_stem(name)?;

    let (head, step) = stem.rsplit_once("_batch_")?;
    let (_, epoch) = head.rsplit_once("_epoch_")?;

    Some(CheckpointId { epoch: epoch.parse().ok()?, step: step.parse().ok()? })
}

fn checkpoint_stem(name: &str) -> Option<&str> {
    [STATE_EXT, MODEL_EXT, CONFIG_EXT].iter().find_map(|ext| name.strip_suffix(ext))
}

/// A checkpoint discovered on disk
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointEntry {
    pub id: CheckpointId,
    pub paths: CheckpointPaths,
}

/// Model checkpoints in `dir`, sorted by step
///
/// With `exp` set, only checkpoints of that experiment are returned.
pub fn list_checkpoints(dir: &Path, exp: Option<&str>) -> Result<Vec<CheckpointEntry>> {
    let entries =
        fs::read_dir(dir).map_err(|e| Error::io(format!("listing {}", dir.display()), e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(format!("listing {}", dir.display()), e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = name.strip_suffix(MODEL_EXT) else {
            continue;
        };
        let Some(id) = parse_checkpoint_name(&path) else {
            continue;
        };
        let (exp_name, _) = match stem.rsplit_once("_epoch_") {
            Some(split) => split,
            None => continue,
        };
        if exp.is_some_and(|e| e != exp_name) {
            continue;
        }
        found.push(CheckpointEntry { id, paths: CheckpointPaths::new(dir, exp_name, id.epoch, id.step) });
    }

    found.sort_by_key(|c| (c.id.step, c.id.epoch));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mode, RuntimeOptions};
    use proptest::prelude::*;

    struct StubModel;

    impl Model for StubModel {
        fn set_mode(&mut self, _: Mode) {}

        fn save_parameters(&self, path: &Path) -> Result<()> {
            fs::write(path, b"weights").map_err(|e| Error::io("stub", e))
        }

        fn initialize(&mut self, _: &RuntimeOptions) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_paths_layout() {
        let paths = CheckpointPaths::new("/runs/kp", "copyrnn", 2, 15000);
        assert_eq!(paths.model(), PathBuf::from("/runs/kp/copyrnn_epoch_2_batch_15000.model"));
        assert_eq!(paths.config(), PathBuf::from("/runs/kp/copyrnn_epoch_2_batch_15000.json"));
        assert_eq!(
            paths.state(),
            PathBuf::from("/runs/kp/copyrnn_epoch_2_batch_15000.state.json")
        );
    }

    #[test]
    fn test_save_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrainerConfig::default().with_name("copyrnn");
        let mut state = TrainingState::resumed(400);
        state.record_score(0.3, 400);

        let paths = CheckpointPaths::new(dir.path(), "copyrnn", 1, 400);
        save_checkpoint(&StubModel, &config, &state, &paths).unwrap();

        assert_eq!(fs::read(paths.model()).unwrap(), b"weights");
        let back = TrainerConfig::from_json_file(paths.config()).unwrap();
        assert_eq!(back, config);
        assert_eq!(load_state(&paths).unwrap(), Some(state));
    }

    #[test]
    fn test_load_state_absent_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CheckpointPaths::new(dir.path(), "x", 1, 1);
        assert_eq!(load_state(&paths).unwrap(), None);
    }

    #[test]
    fn test_parse_checkpoint_name() {
        let id = parse_checkpoint_name(Path::new("/r/kp_copy_epoch_3_batch_700.model")).unwrap();
        assert_eq!(id, CheckpointId { epoch: 3, step: 700 });

        let id = parse_checkpoint_name(Path::new("kp_epoch_1_batch_5.state.json")).unwrap();
        assert_eq!(id, CheckpointId { epoch: 1, step: 5 });

        assert!(parse_checkpoint_name(Path::new("model.bin")).is_none());
        assert!(parse_checkpoint_name(Path::new("kp_epoch_1_batch_5.pred.jsonl")).is_none());
        assert!(parse_checkpoint_name(Path::new("x_epoch_a_batch_1.model")).is_none());
    }

    #[test]
    fn test_list_checkpoints_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "a_epoch_2_batch_200.model",
            "a_epoch_1_batch_100.model",
            "a_epoch_1_batch_100.json",
            "b_epoch_1_batch_150.model",
            "train.log",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let all = list_checkpoints(dir.path(), None).unwrap();
        let steps: Vec<u64> = all.iter().map(|c| c.id.step).collect();
        assert_eq!(steps, vec![100, 150, 200]);

        let only_a = list_checkpoints(dir.path(), Some("a")).unwrap();
        assert_eq!(only_a.len(), 2);
        assert_eq!(only_a[0].paths.model(), dir.path().join("a_epoch_1_batch_100.model"));
    }

    #[test]
    fn test_dotted_experiment_name() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CheckpointPaths::new(dir.path(), "copyrnn.v2", 1, 3);
        let config = TrainerConfig::default().with_name("copyrnn.v2");
        save_checkpoint(&StubModel, &config, &TrainingState::resumed(3), &paths).unwrap();

        assert_eq!(parse_checkpoint_name(&paths.model()), Some(CheckpointId { epoch: 1, step: 3 }));
        assert_eq!(parse_checkpoint_name(&paths.state()), Some(CheckpointId { epoch: 1, step: 3 }));

        let found = list_checkpoints(dir.path(), Some("copyrnn.v2")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].paths, paths);
    }

    proptest! {
        #[test]
        fn prop_names_are_deterministic(
            exp in "[a-z][a-z0-9_.]{0,12}",
            epoch in 1usize..1000,
            step in 0u64..10_000_000,
        ) {
            let a = CheckpointPaths::new("/d", &exp, epoch, step);
            let b = CheckpointPaths::new("/d", &exp, epoch, step);
            prop_assert_eq!(a.model(), b.model());
            prop_assert_eq!(a.config(), b.config());
            prop_assert_eq!(parse_checkpoint_name(&a.model()), Some(CheckpointId { epoch, step }));
        }
    }
}
