//! Learning rate schedulers
//!
//! - `StepDecayLR`: decay by a constant factor every N training steps

mod step_decay;

#[cfg(test)]
mod tests;

pub use step_decay::StepDecayLR;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Step the scheduler (typically called after each batch or evaluation)
    fn step(&mut self);
}
