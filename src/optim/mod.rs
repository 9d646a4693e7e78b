//! Optimizer seams and learning-rate scheduling
//!
//! The optimizer implementation lives in the model backend; this module holds
//! the trait the harness sees plus the step-decay policy configured by
//! `learning_rate`, `schedule_step` and `schedule_gamma`.

mod optimizer;
pub mod scheduler;

pub use optimizer::Optimizer;
pub use scheduler::{LRScheduler, StepDecayLR};
