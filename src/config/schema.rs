//! YAML schema for trainer configuration
//!
//! The same structure is written as pretty JSON next to every checkpoint so a
//! run can be inspected or resumed with the exact settings it was saved with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::RuntimeOptions;

/// Complete trainer configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Experiment naming and output locations
    pub experiment: ExperimentConfig,

    /// Dataset and vocabulary locations
    pub data: DataConfig,

    /// Optimizer and learning-rate schedule
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Loop bounds, cadence, early stop and resume
    #[serde(default)]
    pub training: TrainingParams,
}

/// Experiment naming and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Experiment name, used for the run directory and checkpoint files
    pub name: String,

    /// Base directory under which fresh run directories are created
    #[serde(default = "default_dest_base_dir")]
    pub dest_base_dir: PathBuf,

    /// Plain-text run log file name, relative to the run directory
    #[serde(default = "default_logfile")]
    pub logfile: String,

    /// Metrics dashboard directory; `<run_dir>/logs/` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tensorboard_dir: Option<PathBuf>,
}

/// Dataset and vocabulary locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Training data (line-delimited JSON)
    pub train: PathBuf,

    /// Validation data
    pub valid: PathBuf,

    /// Optional test data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<PathBuf>,

    /// Vocabulary file
    #[serde(default)]
    pub vocab_path: PathBuf,

    /// Number of vocabulary entries to keep
    #[serde(default = "default_vocab_size")]
    pub vocab_size: usize,

    /// Record field holding the source tokens
    #[serde(default = "default_token_field")]
    pub token_field: String,

    /// Record field holding the target keyphrases
    #[serde(default = "default_keyphrase_field")]
    pub keyphrase_field: String,

    /// Examples per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Batches buffered ahead by loader workers
    #[serde(default = "default_prefetch")]
    pub prefetch: usize,
}

/// Optimizer and learning-rate schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Initial learning rate
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Decay the learning rate every `schedule_step` scheduler steps
    #[serde(default = "default_schedule_step")]
    pub schedule_step: usize,

    /// Multiplicative decay factor
    #[serde(default = "default_schedule_gamma")]
    pub schedule_gamma: f64,
}

/// Loop bounds, cadence, early stop and resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Number of epochs
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Evaluate and checkpoint every N steps
    #[serde(default = "default_save_model_step")]
    pub save_model_step: u64,

    /// Stop after this many consecutive non-improving evaluations
    #[serde(default = "default_early_stop_tolerance")]
    pub early_stop_tolerance: usize,

    /// Checkpoint to resume from; its directory is reused for the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_from: Option<PathBuf>,

    /// Step to resume from; inferred from `train_from` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u64>,

    /// Ask the model to replicate itself across devices
    #[serde(default)]
    pub train_parallel: bool,

    /// Random seed handed to the model at construction
    #[serde(default)]
    pub seed: u64,

    /// Enable gradient anomaly detection in the model backend
    #[serde(default = "default_detect_anomaly")]
    pub detect_anomaly: bool,

    /// Top-N cutoffs for evaluation; the largest one drives model selection
    #[serde(default = "default_eval_topn")]
    pub eval_topn: Vec<usize>,
}

fn default_dest_base_dir() -> PathBuf {
    PathBuf::from("runs")
}

fn default_logfile() -> String {
    "train.log".to_string()
}

fn default_vocab_size() -> usize {
    50_000
}

fn default_token_field() -> String {
    "tokens".to_string()
}

fn default_keyphrase_field() -> String {
    "keyphrases".to_string()
}

fn default_batch_size() -> usize {
    64
}

fn default_prefetch() -> usize {
    4
}

fn default_learning_rate() -> f64 {
    1e-4
}

fn default_schedule_step() -> usize {
    100_000
}

fn default_schedule_gamma() -> f64 {
    0.5
}

fn default_epochs() -> usize {
    10
}

fn default_save_model_step() -> u64 {
    5_000
}

fn default_early_stop_tolerance() -> usize {
    5
}

fn default_detect_anomaly() -> bool {
    true
}

fn default_eval_topn() -> Vec<usize> {
    vec![5, 10]
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "keyphrase".to_string(),
            dest_base_dir: default_dest_base_dir(),
            logfile: default_logfile(),
            tensorboard_dir: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            train: PathBuf::from("data/train.jsonl"),
            valid: PathBuf::from("data/valid.jsonl"),
            test: None,
            vocab_path: PathBuf::from("data/vocab.txt"),
            vocab_size: default_vocab_size(),
            token_field: default_token_field(),
            keyphrase_field: default_keyphrase_field(),
            batch_size: default_batch_size(),
            prefetch: default_prefetch(),
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            schedule_step: default_schedule_step(),
            schedule_gamma: default_schedule_gamma(),
        }
    }
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            save_model_step: default_save_model_step(),
            early_stop_tolerance: default_early_stop_tolerance(),
            train_from: None,
            step: None,
            train_parallel: false,
            seed: 0,
            detect_anomaly: default_detect_anomaly(),
            eval_topn: default_eval_topn(),
        }
    }
}

impl TrainerConfig {
    /// Set the experiment name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.experiment.name = name.into();
        self
    }

    /// Set the base directory for fresh runs
    pub fn with_dest_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.experiment.dest_base_dir = dir.into();
        self
    }

    /// Set the epoch count
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.training.epochs = epochs;
        self
    }

    /// Set the evaluation/checkpoint cadence in steps
    pub fn with_save_model_step(mut self, steps: u64) -> Self {
        self.training.save_model_step = steps;
        self
    }

    /// Set the early-stop tolerance
    pub fn with_early_stop_tolerance(mut self, tolerance: usize) -> Self {
        self.training.early_stop_tolerance = tolerance;
        self
    }

    /// Resume from a checkpoint, optionally at an explicit step
    pub fn with_resume(mut self, train_from: impl Into<PathBuf>, step: Option<u64>) -> Self {
        self.training.train_from = Some(train_from.into());
        self.training.step = step;
        self
    }

    /// Set the validation and optional test sources
    pub fn with_eval_sources(mut self, valid: impl Into<PathBuf>, test: Option<PathBuf>) -> Self {
        self.data.valid = valid.into();
        self.data.test = test;
        self
    }

    /// Largest configured top-N, the cutoff used for model selection
    pub fn headline_top_n(&self) -> Option<usize> {
        self.training.eval_topn.iter().copied().max()
    }

    /// Explicit initialization parameters for the model backend
    pub fn runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions {
            seed: self.training.seed,
            detect_anomaly: self.training.detect_anomaly,
            parallel: self.training.train_parallel,
        }
    }

    /// Pretty JSON snapshot written beside checkpoints
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = r"
experiment:
  name: kp20k
data:
  train: data/kp20k_training.jsonl
  valid: data/kp20k_validation.jsonl
";
        let config: TrainerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.experiment.name, "kp20k");
        assert_eq!(config.experiment.logfile, "train.log");
        assert_eq!(config.training.eval_topn, vec![5, 10]);
        assert_eq!(config.data.token_field, "tokens");
        assert!(config.training.detect_anomaly);
        assert!(config.training.train_from.is_none());
    }

    #[test]
    fn test_headline_top_n_is_largest() {
        let mut config = TrainerConfig::default();
        config.training.eval_topn = vec![10, 5, 15];
        assert_eq!(config.headline_top_n(), Some(15));

        config.training.eval_topn.clear();
        assert_eq!(config.headline_top_n(), None);
    }

    #[test]
    fn test_json_snapshot_roundtrips() {
        let config = TrainerConfig::default()
            .with_name("copyrnn")
            .with_resume("runs/copyrnn/copyrnn_epoch_1_batch_500.model", Some(500));
        let json = config.to_json_pretty().unwrap();
        let back: TrainerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_runtime_options_follow_config() {
        let mut config = TrainerConfig::default();
        config.training.seed = 42;
        config.training.train_parallel = true;
        config.training.detect_anomaly = false;

        let opts = config.runtime_options();
        assert_eq!(opts.seed, 42);
        assert!(opts.parallel);
        assert!(!opts.detect_anomaly);
    }
}
