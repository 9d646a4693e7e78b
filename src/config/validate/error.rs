//! Validation error types
//!
//! Defines all validation error variants for trainer configuration.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Experiment name cannot be empty")]
    EmptyExperimentName,

    #[error("Training data path does not exist: {0}")]
    TrainDataNotFound(String),

    #[error("Validation data path does not exist: {0}")]
    ValidDataNotFound(String),

    #[error("Test data path does not exist: {0}")]
    TestDataNotFound(String),

    #[error("Resume checkpoint does not exist: {0}")]
    ResumeCheckpointNotFound(String),

    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid schedule gamma: {0} (must be > 0.0)")]
    InvalidScheduleGamma(f64),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid vocabulary size: {0} (must be > 0)")]
    InvalidVocabSize(usize),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid save cadence: {0} (must be > 0)")]
    InvalidSaveInterval(u64),

    #[error("Invalid early stop tolerance: {0} (must be > 0)")]
    InvalidEarlyStopTolerance(usize),

    #[error("Evaluation top-N list cannot be empty")]
    EmptyEvalTopN,

    #[error("Invalid evaluation top-N: {0} (must be > 0)")]
    InvalidEvalTopN(usize),
}
