//! Error types for the training harness.
//!
//! Variants follow how a failure is handled by the controller: per-batch
//! training failures are recovered locally, cancellations end the run
//! gracefully, everything else escaping the batch loop is fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Result alias for trainer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the training harness and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("stage name error, must be `valid` or `test` (got `{0}`)")]
    InvalidStage(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("Training step failed: {0}")]
    Training(String),

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("Prediction file was not written: {}", .0.display())]
    MissingPredictions(PathBuf),

    #[error("Data loader error: {0}")]
    Loader(String),

    #[error("Training interrupted by operator")]
    Cancelled,
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// True for operator-initiated termination, which is not a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Render the error together with its full `source()` chain.
    pub fn diagnostic(&self) -> String {
        let mut out = format!("{self}");
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        out
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_constructor() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io("reading config", io_err);

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn test_cancellation_is_not_failure() {
        assert!(Error::Cancelled.is_cancellation());
        assert!(!Error::Training("nan loss".into()).is_cancellation());
    }

    #[test]
    fn test_invalid_stage_message() {
        let err = Error::InvalidStage("bogus".into());
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("valid"));
    }

    #[test]
    fn test_diagnostic_includes_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io("writing checkpoint", io_err);
        let diag = err.diagnostic();
        assert!(diag.contains("writing checkpoint"));
        assert!(diag.contains("caused by: denied"));
    }

    #[test]
    fn test_not_implemented_names_operation() {
        let err = Error::NotImplemented("train_batch");
        assert_eq!(err.to_string(), "train_batch is not implemented");
    }
}
