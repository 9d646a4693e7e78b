//! Training control loop
//!
//! [`TrainingController`] owns the epoch/step loop, loss logging, the
//! periodic evaluate-and-checkpoint protocol and early stopping. The model
//! specific parts come from a [`KeyphraseTrainer`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use keyphrase_trainer::config::TrainerConfig;
//! use keyphrase_trainer::data::VecLoader;
//! use keyphrase_trainer::eval::{Aggregation, EvalContext, EvalStage, EvaluationResult, Scope};
//! use keyphrase_trainer::model::{Mode, Model};
//! use keyphrase_trainer::train::{KeyphraseTrainer, TrainingController};
//! use keyphrase_trainer::Result;
//!
//! struct Net;
//! impl Model for Net {
//!     fn set_mode(&mut self, _: Mode) {}
//!     fn save_parameters(&self, path: &Path) -> Result<()> {
//!         std::fs::write(path, b"").map_err(|e| keyphrase_trainer::Error::io("save", e))
//!     }
//! }
//!
//! struct CopyRnn(Net);
//! impl KeyphraseTrainer for CopyRnn {
//!     type Batch = Vec<u32>;
//!     type Model = Net;
//!     fn model(&self) -> &Net { &self.0 }
//!     fn model_mut(&mut self) -> &mut Net { &mut self.0 }
//!     fn train_batch(&mut self, batch: Vec<u32>, _step: u64) -> Result<f64> {
//!         Ok(batch.len() as f64)
//!     }
//!     fn evaluate(&mut self, step: u64, ctx: &mut EvalContext<'_>) -> Result<f64> {
//!         let top_n = ctx.top_n().to_vec();
//!         let stats = ctx.evaluate_stage(step, EvalStage::Valid, |_src, pred| {
//!             std::fs::write(pred, "{}\n").map_err(|e| keyphrase_trainer::Error::io("pred", e))
//!         })?;
//!         stats.headline_f1(&top_n)
//!     }
//! }
//!
//! let evaluator = |_: &Path, agg: Aggregation, scope: Scope, _: &[usize]| -> Result<EvaluationResult> {
//!     Ok(EvaluationResult::new(agg, scope))
//! };
//! let loader = VecLoader::new(vec![vec![1, 2, 3]; 100]);
//! let mut controller =
//!     TrainingController::new(TrainerConfig::default(), CopyRnn(Net), loader, evaluator)?;
//! let result = controller.run();
//! println!("best step {}", result.best_step);
//! # Ok::<(), keyphrase_trainer::Error>(())
//! ```

mod cancel;
mod controller;
mod dest;
mod result;
mod state;
mod trainer;


pub use cancel::CancelToken;
pub use controller::TrainingController;
pub use dest::{prepare_dest_dir, resume_step};
pub use result::{RunOutcome, TrainResult};
pub use state::{ScoreUpdate, TrainingState};
pub use trainer::KeyphraseTrainer;
