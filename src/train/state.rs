//! Best-score and early-stop bookkeeping

use serde::{Deserialize, Serialize};

/// How an evaluation score changed the best-score record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdate {
    /// First evaluation of the run; adopted without counting as stale
    First,
    /// Score matched or beat the best; stale count reset
    Improved,
    /// Score below the best; stale count incremented
    Stale,
}

/// Loop position plus best-score bookkeeping
///
/// `best_step` is always the step at which `best_score` was last set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingState {
    /// Global step, counted across epochs
    pub current_step: u64,
    /// Current epoch, starting at 1
    pub current_epoch: usize,
    /// Best headline score seen so far
    pub best_score: Option<f64>,
    /// Step at which `best_score` was recorded
    pub best_step: u64,
    /// Consecutive evaluations without improvement
    pub stale_evaluations: usize,
}

impl Default for TrainingState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingState {
    /// Fresh state at step 0, epoch 1
    pub fn new() -> Self {
        Self::resumed(0)
    }

    /// State continuing from `step`
    pub fn resumed(step: u64) -> Self {
        Self {
            current_step: step,
            current_epoch: 1,
            best_score: None,
            best_step: 0,
            stale_evaluations: 0,
        }
    }

    /// Fold an evaluation score taken at `step` into the record
    ///
    /// Ties count as improvement, so on a plateau the latest step wins.
    pub fn record_score(&mut self, score: f64, step: u64) -> ScoreUpdate {
        match self.best_score {
            None => {
                self.best_score = Some(score);
                self.best_step = step;
                ScoreUpdate::First
            }
            Some(best) if score >= best => {
                self.best_score = Some(score);
                self.best_step = step;
                self.stale_evaluations = 0;
                ScoreUpdate::Improved
            }
            Some(_) => {
                self.stale_evaluations += 1;
                ScoreUpdate::Stale
            }
        }
    }

    /// True once `tolerance` consecutive evaluations failed to improve
    pub fn should_stop(&self, tolerance: usize) -> bool {
        self.stale_evaluations >= tolerance
    }
}
