//! Step decay on the global training step

use tracing::debug;

use super::LRScheduler;
use crate::config::OptimizerConfig;
use crate::optim::Optimizer;

/// Learning rate that drops by `gamma` every `decay_every` training steps
///
/// `lr(step) = base_lr * gamma^(step / decay_every)`. The schedule is a pure
/// function of the step, so a resumed run lands on the same rate it would
/// have had without the interruption.
#[derive(Clone, Debug, PartialEq)]
pub struct StepDecayLR {
    base_lr: f64,
    gamma: f64,
    decay_every: u64,
    steps: u64,
}

impl StepDecayLR {
    /// `decay_every == 0` disables decay
    pub fn new(base_lr: f64, decay_every: u64, gamma: f64) -> Self {
        Self { base_lr, gamma, decay_every, steps: 0 }
    }

    /// Build from `learning_rate`, `schedule_step` and `schedule_gamma`
    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self::new(config.learning_rate, config.schedule_step as u64, config.schedule_gamma)
    }

    /// Schedule positioned at `step`, for a run resumed from a checkpoint
    pub fn resumed(config: &OptimizerConfig, step: u64) -> Self {
        Self { steps: step, ..Self::from_config(config) }
    }

    /// Steps taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of decays applied by `step`
    pub fn decays_at(&self, step: u64) -> u32 {
        match self.decay_every {
            0 => 0,
            every => u32::try_from(step / every).unwrap_or(u32::MAX),
        }
    }

    /// Rate in effect at `step`
    pub fn lr_at(&self, step: u64) -> f64 {
        match i32::try_from(self.decays_at(step)) {
            Ok(n) => self.base_lr * self.gamma.powi(n),
            Err(_) => 0.0,
        }
    }

    /// Push the current rate into `optimizer`; true if it changed
    pub fn apply<O: Optimizer + ?Sized>(&self, optimizer: &mut O) -> bool {
        let lr = self.get_lr();
        if optimizer.lr() == lr {
            return false;
        }
        debug!("learning rate {:e} -> {:e} at step {}", optimizer.lr(), lr, self.steps);
        optimizer.set_lr(lr);
        true
    }
}

impl LRScheduler for StepDecayLR {
    fn get_lr(&self) -> f64 {
        self.lr_at(self.steps)
    }

    fn step(&mut self) {
        self.steps += 1;
    }
}
