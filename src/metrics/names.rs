//! Metric tag layout
//!
//! Tags encode stage, scope, metric and cutoff so the dashboard groups
//! validation and test curves separately.

use crate::eval::EvalStage;

/// Training loss, written every step
pub const LOSS: &str = "loss";

/// `<stage>/macro_<metric>@<n>` for the unscoped macro result
pub fn stage_macro(stage: EvalStage, metric: &str, n: usize) -> String {
    format!("{}/macro_{metric}@{n}", stage.as_str())
}

/// `present/<stage> macro_f1@<n>`
pub fn present_f1(stage: EvalStage, n: usize) -> String {
    format!("present/{} macro_f1@{n}", stage.as_str())
}

/// `absent/<stage> macro_f1@<n>`
pub fn absent_f1(stage: EvalStage, n: usize) -> String {
    format!("absent/{} macro_f1@{n}", stage.as_str())
}

/// `absent/<stage> macro_recall@<n>`
pub fn absent_recall(stage: EvalStage, n: usize) -> String {
    format!("absent/{} macro_recall@{n}", stage.as_str())
}
