//! Evaluator seam

use std::path::Path;

use super::{Aggregation, EvaluationResult, Scope};
use crate::error::Result;

/// Scores a prediction file against its gold keyphrases
///
/// The record schema of the prediction file and the metric arithmetic belong
/// to the implementation.
pub trait Evaluator {
    /// Evaluate `predictions` at each cutoff in `top_n`
    fn evaluate(
        &self,
        predictions: &Path,
        aggregation: Aggregation,
        scope: Scope,
        top_n: &[usize],
    ) -> Result<EvaluationResult>;
}

impl<F> Evaluator for F
where
    F: Fn(&Path, Aggregation, Scope, &[usize]) -> Result<EvaluationResult>,
{
    fn evaluate(
        &self,
        predictions: &Path,
        aggregation: Aggregation,
        scope: Scope,
        top_n: &[usize],
    ) -> Result<EvaluationResult> {
        self(predictions, aggregation, scope, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::TopNStats;

    #[test]
    fn test_closure_evaluator() {
        let eval = |_: &Path, agg: Aggregation, scope: Scope, top_n: &[usize]| -> Result<EvaluationResult> {
            let mut r = EvaluationResult::new(agg, scope);
            for &n in top_n {
                r = r.with(n, TopNStats { precision: 0.1, recall: 0.2, f1: n as f64 / 100.0 });
            }
            Ok(r)
        };

        let r = eval
            .evaluate(Path::new("x.jsonl"), Aggregation::Macro, Scope::Present, &[5, 10])
            .unwrap();
        assert_eq!(r.scope, Scope::Present);
        assert_eq!(r.get(10).unwrap().f1, 0.1);
    }
}
