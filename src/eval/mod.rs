//! Evaluation types and the stage protocol
//!
//! Scoring itself is delegated to an [`Evaluator`]; this module defines the
//! result shapes, the prediction-file layout and the per-stage protocol that
//! feeds the metrics sink.

mod context;
mod evaluator;
pub mod prediction;
mod stage;
mod stats;


pub use context::EvalContext;
pub use evaluator::Evaluator;
pub use prediction::{prediction_path, PredictionWriter};
pub use stage::EvalStage;
pub use stats::{Aggregation, EvaluationResult, Scope, StageStatistics, TopNStats};
