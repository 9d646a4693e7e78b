//! Tests for learning rate schedulers

use super::*;
use crate::config::OptimizerConfig;
use crate::optim::Optimizer;
use approx::assert_abs_diff_eq;

struct Fixed(f64);

impl Optimizer for Fixed {
    fn lr(&self) -> f64 {
        self.0
    }

    fn set_lr(&mut self, lr: f64) {
        self.0 = lr;
    }
}

fn optimizer_config(lr: f64, every: usize, gamma: f64) -> OptimizerConfig {
    OptimizerConfig { learning_rate: lr, schedule_step: every, schedule_gamma: gamma }
}

#[test]
fn test_step_decay_halves_at_boundary() {
    let mut scheduler = StepDecayLR::new(0.1, 10, 0.5);
    assert_abs_diff_eq!(scheduler.get_lr(), 0.1, epsilon = 1e-12);

    for _ in 0..9 {
        scheduler.step();
    }
    assert_abs_diff_eq!(scheduler.get_lr(), 0.1, epsilon = 1e-12);

    scheduler.step();
    assert_abs_diff_eq!(scheduler.get_lr(), 0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(scheduler.lr_at(20), 0.025, epsilon = 1e-12);
    assert_eq!(scheduler.decays_at(29), 2);
}

#[test]
fn test_zero_interval_disables_decay() {
    let scheduler = StepDecayLR::new(0.3, 0, 0.5);
    assert_eq!(scheduler.decays_at(1_000_000), 0);
    assert_abs_diff_eq!(scheduler.lr_at(1_000_000), 0.3, epsilon = 1e-12);
}

#[test]
fn test_resumed_matches_uninterrupted() {
    let config = optimizer_config(1e-3, 4, 0.1);

    let mut straight = StepDecayLR::from_config(&config);
    for _ in 0..9 {
        straight.step();
    }
    let resumed = StepDecayLR::resumed(&config, 9);

    assert_eq!(resumed, straight);
    assert_abs_diff_eq!(resumed.get_lr(), 1e-5, epsilon = 1e-15);
}

#[test]
fn test_apply_reports_changes() {
    let mut opt = Fixed(0.2);
    let mut scheduler = StepDecayLR::new(0.2, 1, 0.5);
    assert!(!scheduler.apply(&mut opt));

    scheduler.step();
    assert!(scheduler.apply(&mut opt));
    assert_abs_diff_eq!(opt.lr(), 0.1, epsilon = 1e-12);
    assert!(!scheduler.apply(&mut opt));
}

#[test]
fn test_huge_step_saturates_to_zero() {
    let scheduler = StepDecayLR::new(0.1, 1, 0.5);
    assert_eq!(scheduler.lr_at(u64::MAX), 0.0);
}
