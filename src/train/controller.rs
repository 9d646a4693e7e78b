//! The epoch/step loop

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use super::dest::{prepare_dest_dir, resume_step};
use super::{CancelToken, KeyphraseTrainer, RunOutcome, TrainResult, TrainingState};
use crate::checkpoint::{save_checkpoint, CheckpointPaths};
use crate::config::{validate_config, TrainerConfig};
use crate::data::DataLoader;
use crate::error::Result;
use crate::eval::{EvalContext, Evaluator};
use crate::logging::RunLog;
use crate::metrics::{names, JsonlScalarWriter, MetricsWriter};
use crate::model::{Mode, Model};

/// Drives a [`KeyphraseTrainer`] over a [`DataLoader`]
///
/// Every `save_model_step` steps the trainer's `evaluate` runs, the best
/// score is updated and a checkpoint is written. Training stops early once
/// `early_stop_tolerance` consecutive evaluations fail to improve.
///
/// The run log is scoped to the thread that built the controller; construct
/// and run it on the same thread.
pub struct TrainingController<T, L>
where
    T: KeyphraseTrainer,
    L: DataLoader<Batch = T::Batch>,
{
    session: Session<T>,
    loader: L,
    _log: RunLog,
}

/// Everything but the loader, so the batch iterator and the step logic can
/// borrow separately
struct Session<T: KeyphraseTrainer> {
    config: TrainerConfig,
    trainer: T,
    evaluator: Box<dyn Evaluator>,
    metrics: Box<dyn MetricsWriter>,
    state: TrainingState,
    dest_dir: PathBuf,
    cancel: CancelToken,
}

impl<T, L> TrainingController<T, L>
where
    T: KeyphraseTrainer,
    L: DataLoader<Batch = T::Batch>,
{
    /// Validate `config`, prepare the run directory and initialize the model
    pub fn new<E>(config: TrainerConfig, mut trainer: T, loader: L, evaluator: E) -> Result<Self>
    where
        E: Evaluator + 'static,
    {
        validate_config(&config)?;
        let dest_dir = prepare_dest_dir(&config)?;
        let log = RunLog::open(dest_dir.join(&config.experiment.logfile))?;

        let metrics_dir =
            config.experiment.tensorboard_dir.clone().unwrap_or_else(|| dest_dir.join("logs"));
        let metrics = JsonlScalarWriter::open(&metrics_dir)?;

        trainer.model_mut().initialize(&config.runtime_options())?;

        let state = TrainingState::resumed(resume_step(&config));
        if config.training.train_from.is_some() {
            info!("train from destination dir:{}", dest_dir.display());
            info!("train from step {}", state.current_step);
        } else {
            info!("destination dir:{}", dest_dir.display());
        }

        Ok(Self {
            session: Session {
                config,
                trainer,
                evaluator: Box::new(evaluator),
                metrics: Box::new(metrics),
                state,
                dest_dir,
                cancel: CancelToken::new(),
            },
            loader,
            _log: log,
        })
    }

    /// Replace the metrics sink
    pub fn with_metrics_writer(mut self, writer: impl MetricsWriter + 'static) -> Self {
        self.session.metrics = Box::new(writer);
        self
    }

    /// Use `token` for cancellation
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.session.cancel = token;
        self
    }

    /// Token that interrupts this run
    pub fn cancel_token(&self) -> CancelToken {
        self.session.cancel.clone()
    }

    /// Run directory
    pub fn dest_dir(&self) -> &Path {
        &self.session.dest_dir
    }

    pub fn state(&self) -> &TrainingState {
        &self.session.state
    }

    pub fn trainer(&self) -> &T {
        &self.session.trainer
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Train until the epochs run out, early stop, interrupt or a fatal error
    ///
    /// The loader is shut down and metrics flushed on every exit path.
    pub fn run(&mut self) -> TrainResult {
        let start = Instant::now();

        let outcome = match self.train_epochs() {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancellation() => {
                info!("training interrupted at step {}", self.session.state.current_step);
                RunOutcome::Interrupted
            }
            Err(e) => {
                error!("training failed: {}", e.diagnostic());
                RunOutcome::Failed(e.to_string())
            }
        };

        self.loader.shutdown();
        if let Err(e) = self.session.metrics.flush() {
            warn!("flushing metrics failed: {e}");
        }

        let elapsed_secs = start.elapsed().as_secs_f64();
        info!("{elapsed_secs:.1}s");

        let state = &self.session.state;
        TrainResult {
            outcome,
            final_step: state.current_step,
            final_epoch: state.current_epoch,
            best_score: state.best_score,
            best_step: state.best_step,
            elapsed_secs,
        }
    }

    fn train_epochs(&mut self) -> Result<RunOutcome> {
        let epochs = self.session.config.training.epochs;

        for epoch in 1..=epochs {
            self.session.state.current_epoch = epoch;
            self.session.trainer.model_mut().set_mode(Mode::Train);
            debug!("epoch {epoch}");

            let mut stop = false;
            for batch in self.loader.batches()? {
                self.session.cancel.check()?;
                if self.session.step(batch?)? {
                    stop = true;
                    break;
                }
            }

            if stop {
                info!("best step {}", self.session.state.best_step);
                return Ok(RunOutcome::EarlyStopped);
            }
        }

        Ok(RunOutcome::Completed)
    }
}

impl<T: KeyphraseTrainer> Session<T> {
    /// Train one batch; true when early stop fired
    fn step(&mut self, batch: T::Batch) -> Result<bool> {
        let loss = match self.trainer.train_batch(batch, self.state.current_step) {
            Ok(loss) => loss,
            Err(e) if e.is_cancellation() => return Err(e),
            Err(e) => {
                error!("step {} failed: {}", self.state.current_step + 1, e.diagnostic());
                0.0
            }
        };

        self.state.current_step += 1;
        let step = self.state.current_step;
        self.metrics.add_scalar(names::LOSS, loss, step)?;

        if step % self.config.training.save_model_step == 0 {
            let stale = self.evaluate_and_checkpoint()?;
            return Ok(stale >= self.config.training.early_stop_tolerance);
        }
        Ok(false)
    }

    /// Evaluate, update the best score and write a checkpoint
    fn evaluate_and_checkpoint(&mut self) -> Result<usize> {
        let step = self.state.current_step;
        let epoch = self.state.current_epoch;

        self.trainer.model_mut().set_mode(Mode::Eval);
        let score = {
            let mut ctx = EvalContext::new(
                &self.config,
                &self.dest_dir,
                &*self.evaluator,
                &mut *self.metrics,
            );
            self.trainer.evaluate(step, &mut ctx)
        };
        self.trainer.model_mut().set_mode(Mode::Train);
        let score = score?;

        let update = self.state.record_score(score, step);
        debug!("step {step} score {score:.4} ({update:?})");

        let paths = CheckpointPaths::new(&self.dest_dir, &self.config.experiment.name, epoch, step);
        save_checkpoint(self.trainer.model(), &self.config, &self.state, &paths)?;

        let top_n = self.config.headline_top_n().unwrap_or_default();
        info!(
            "best score: step {} macro f1@{} {:.4}",
            self.state.best_step,
            top_n,
            self.state.best_score.unwrap_or_default()
        );
        info!("epoch {epoch} step {step}, model saved");

        Ok(self.state.stale_evaluations)
    }
}
