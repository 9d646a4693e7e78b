//! Trainer configuration
//!
//! YAML on disk, JSON in checkpoint snapshots. Loading always validates.

mod loader;
mod schema;
mod validate;

pub use loader::{load_config, save_config};
pub use schema::{DataConfig, ExperimentConfig, OptimizerConfig, TrainerConfig, TrainingParams};
pub use validate::{validate_config, validate_paths, ValidationError};
