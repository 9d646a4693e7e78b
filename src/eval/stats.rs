//! Evaluation result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::EvalStage;
use crate::error::{Error, Result};

/// Which keyphrases an evaluation counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// All gold keyphrases
    All,
    /// Keyphrases that appear in the source text
    Present,
    /// Keyphrases absent from the source text
    Absent,
}

impl Scope {
    /// Scope name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// How per-document statistics are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Average of per-document scores
    Macro,
    /// Scores over pooled counts
    Micro,
}

/// Precision, recall and F1 at one top-N cutoff
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TopNStats {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl TopNStats {
    /// Metric names in emission order
    pub const METRICS: [&'static str; 3] = ["precision", "recall", "f1"];

    /// Look a metric up by name
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "precision" => Some(self.precision),
            "recall" => Some(self.recall),
            "f1" => Some(self.f1),
            _ => None,
        }
    }
}

/// Statistics for one evaluator invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub aggregation: Aggregation,
    pub scope: Scope,
    pub by_top_n: BTreeMap<usize, TopNStats>,
}

impl EvaluationResult {
    /// Create an empty result
    pub fn new(aggregation: Aggregation, scope: Scope) -> Self {
        Self { aggregation, scope, by_top_n: BTreeMap::new() }
    }

    /// Builder-style insert
    pub fn with(mut self, n: usize, stats: TopNStats) -> Self {
        self.by_top_n.insert(n, stats);
        self
    }

    /// Stats at cutoff `n`
    pub fn get(&self, n: usize) -> Option<&TopNStats> {
        self.by_top_n.get(&n)
    }

    /// Stats at cutoff `n`, or an evaluation error naming what is missing
    pub fn require(&self, n: usize) -> Result<&TopNStats> {
        self.get(n).ok_or_else(|| {
            Error::Evaluation(format!(
                "{} {:?} result has no entry for top-{n}",
                self.scope.as_str(),
                self.aggregation
            ))
        })
    }

    /// One named metric at cutoff `n`
    pub fn metric(&self, n: usize, name: &str) -> Option<f64> {
        self.get(n).and_then(|s| s.metric(name))
    }

    /// `(n, stats)` in ascending cutoff order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TopNStats)> {
        self.by_top_n.iter().map(|(n, s)| (*n, s))
    }
}

/// The three macro results produced for one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageStatistics {
    pub stage: EvalStage,
    pub all: EvaluationResult,
    pub present: EvaluationResult,
    pub absent: EvaluationResult,
}

impl StageStatistics {
    /// Macro F1 at the largest of `top_n` from the unscoped result
    ///
    /// This is the score used for best-model bookkeeping.
    pub fn headline_f1(&self, top_n: &[usize]) -> Result<f64> {
        let n = top_n
            .iter()
            .copied()
            .max()
            .ok_or_else(|| Error::Evaluation("no top-N cutoffs configured".to_string()))?;
        Ok(self.all.require(n)?.f1)
    }
}
