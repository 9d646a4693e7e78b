//! Extension points supplied by a concrete trainer

use crate::error::{Error, Result};
use crate::eval::EvalContext;
use crate::model::Model;

/// Model-specific half of a training run
///
/// The controller owns the loop; implementors own the loss computation and
/// the evaluation procedure. Both default to [`Error::NotImplemented`].
pub trait KeyphraseTrainer {
    /// Batch type consumed by [`train_batch`](Self::train_batch)
    type Batch;

    /// Model being trained
    type Model: Model;

    /// Shared access to the model
    fn model(&self) -> &Self::Model;

    /// Exclusive access to the model
    fn model_mut(&mut self) -> &mut Self::Model;

    /// Forward, backward and optimizer step for one batch; returns the loss
    ///
    /// `step` is the number of batches completed before this one. An error is
    /// logged by the controller and recorded as a loss of 0.0.
    fn train_batch(&mut self, _batch: Self::Batch, _step: u64) -> Result<f64> {
        Err(Error::NotImplemented("train_batch"))
    }

    /// Headline score at `step`, higher is better
    ///
    /// Implementations usually call [`EvalContext::evaluate_stage`] for the
    /// validation split and return its macro F1 at the largest cutoff.
    fn evaluate(&mut self, _step: u64, _ctx: &mut EvalContext<'_>) -> Result<f64> {
        Err(Error::NotImplemented("evaluate"))
    }
}
