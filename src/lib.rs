//! Training control loop for sequence-to-sequence keyphrase models
//!
//! The crate owns everything around the numeric work: the epoch/step loop,
//! per-batch failure recovery, periodic evaluation and checkpointing,
//! best-score tracking, early stopping and metric logging. Models,
//! optimizers, data pipelines and metric arithmetic plug in through traits.
//!
//! - [`train`]: [`TrainingController`](train::TrainingController) and the
//!   [`KeyphraseTrainer`](train::KeyphraseTrainer) extension points
//! - [`eval`]: evaluation result types and the stage protocol
//! - [`checkpoint`]: checkpoint layout and discovery
//! - [`metrics`]: scalar sinks and tag layout
//! - [`config`]: YAML configuration and validation
//! - [`data`], [`model`], [`optim`]: collaborator seams

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod optim;
pub mod train;

pub use error::{Error, Result};
