//! Training result types

use serde::{Deserialize, Serialize};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// All epochs ran
    Completed,
    /// Early-stop tolerance reached
    EarlyStopped,
    /// Operator interrupt
    Interrupted,
    /// Fatal error escaped the batch loop
    Failed(String),
}

impl RunOutcome {
    /// True unless the run failed
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainResult {
    pub outcome: RunOutcome,
    /// Global step reached
    pub final_step: u64,
    /// Epoch in progress when the run ended
    pub final_epoch: usize,
    /// Best headline score
    pub best_score: Option<f64>,
    /// Step of the best score
    pub best_step: u64,
    /// Wall-clock duration in seconds
    pub elapsed_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success() {
        assert!(RunOutcome::Completed.is_success());
        assert!(RunOutcome::EarlyStopped.is_success());
        assert!(RunOutcome::Interrupted.is_success());
        assert!(!RunOutcome::Failed("disk full".into()).is_success());
    }
}
