//! Stage evaluation protocol
//!
//! [`EvalContext`] is what a concrete trainer sees inside `evaluate(step)`.
//! It turns "generate predictions for this split" into scored, logged
//! statistics.

use std::path::Path;

use tracing::debug;

use super::prediction::prediction_path;
use super::{
    Aggregation, EvalStage, EvaluationResult, Evaluator, Scope, StageStatistics, TopNStats,
};
use crate::config::TrainerConfig;
use crate::error::{Error, Result};
use crate::metrics::{names, MetricsWriter};

/// Borrowed view of the controller used during one evaluation
pub struct EvalContext<'a> {
    config: &'a TrainerConfig,
    dest_dir: &'a Path,
    evaluator: &'a dyn Evaluator,
    writer: &'a mut dyn MetricsWriter,
}

impl<'a> EvalContext<'a> {
    /// Assemble a context from controller parts
    pub fn new(
        config: &'a TrainerConfig,
        dest_dir: &'a Path,
        evaluator: &'a dyn Evaluator,
        writer: &'a mut dyn MetricsWriter,
    ) -> Self {
        Self { config, dest_dir, evaluator, writer }
    }

    /// Run directory
    pub fn dest_dir(&self) -> &Path {
        self.dest_dir
    }

    /// Active configuration
    pub fn config(&self) -> &TrainerConfig {
        self.config
    }

    /// Configured top-N cutoffs
    pub fn top_n(&self) -> &[usize] {
        &self.config.training.eval_topn
    }

    /// Record field holding the source tokens
    pub fn token_field(&self) -> &str {
        &self.config.data.token_field
    }

    /// Record field holding the gold keyphrases
    pub fn keyphrase_field(&self) -> &str {
        &self.config.data.keyphrase_field
    }

    /// Source data file for a stage
    pub fn source_path(&self, stage: EvalStage) -> Result<&Path> {
        match stage {
            EvalStage::Valid => Ok(&self.config.data.valid),
            EvalStage::Test => self
                .config
                .data
                .test
                .as_deref()
                .ok_or_else(|| Error::Config("no test data configured".to_string())),
        }
    }

    /// [`evaluate_stage`](Self::evaluate_stage) with the stage given by name
    ///
    /// The name is checked before anything touches the filesystem.
    pub fn evaluate_stage_named<F>(
        &mut self,
        step: u64,
        stage: &str,
        predict: F,
    ) -> Result<StageStatistics>
    where
        F: FnOnce(&Path, &Path) -> Result<()>,
    {
        let stage: EvalStage = stage.parse()?;
        self.evaluate_stage(step, stage, predict)
    }

    /// Generate, score and log predictions for one stage
    ///
    /// `predict(source, predictions)` must write line-delimited JSON records
    /// for `source` to exactly `predictions`. The file is then scored three
    /// times (all, present, absent keyphrases) with macro aggregation and
    /// every statistic is written to the metrics sink at `step`.
    pub fn evaluate_stage<F>(
        &mut self,
        step: u64,
        stage: EvalStage,
        predict: F,
    ) -> Result<StageStatistics>
    where
        F: FnOnce(&Path, &Path) -> Result<()>,
    {
        let source = self.source_path(stage)?;
        let pred_path = prediction_path(self.dest_dir, source, step);
        debug!("{} predictions for {} -> {}", stage, source.display(), pred_path.display());

        predict(source, &pred_path)?;
        if !pred_path.exists() {
            return Err(Error::MissingPredictions(pred_path));
        }

        let top_n = self.config.training.eval_topn.as_slice();
        let score = |scope| self.evaluator.evaluate(&pred_path, Aggregation::Macro, scope, top_n);
        let all = score(Scope::All)?;
        let present = score(Scope::Present)?;
        let absent = score(Scope::Absent)?;

        let stats = StageStatistics { stage, all, present, absent };
        self.emit(step, &stats)?;
        Ok(stats)
    }

    fn emit(&mut self, step: u64, stats: &StageStatistics) -> Result<()> {
        let stage = stats.stage;

        for (n, counter) in stats.all.iter() {
            for metric in TopNStats::METRICS {
                if let Some(value) = counter.metric(metric) {
                    self.writer.add_scalar(&names::stage_macro(stage, metric, n), value, step)?;
                }
            }
        }

        for &n in &self.config.training.eval_topn {
            let present = require(&stats.present, n)?;
            self.writer.add_scalar(&names::present_f1(stage, n), present.f1, step)?;
        }

        for &n in &self.config.training.eval_topn {
            let absent = require(&stats.absent, n)?;
            self.writer.add_scalar(&names::absent_f1(stage, n), absent.f1, step)?;
            self.writer.add_scalar(&names::absent_recall(stage, n), absent.recall, step)?;
        }

        Ok(())
    }
}

fn require(result: &EvaluationResult, n: usize) -> Result<TopNStats> {
    result.require(n).copied()
}
