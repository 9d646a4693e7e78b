//! Model seam
//!
//! Network architecture, autograd and device placement are owned by the model
//! backend. The controller only switches modes, hands over initialization
//! parameters and asks for a parameter snapshot at checkpoint time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Execution mode of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Dropout and gradient tracking enabled
    Train,
    /// Inference behaviour
    Eval,
}

/// Initialization parameters passed explicitly to a model backend
///
/// These replace process-wide seeding and anomaly switches, so two controllers
/// in the same process each configure only their own model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeOptions {
    /// Random seed for parameter init and dropout
    pub seed: u64,
    /// Enable gradient anomaly detection
    pub detect_anomaly: bool,
    /// Replicate the model across available devices
    pub parallel: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self { seed: 0, detect_anomaly: true, parallel: false }
    }
}

/// A trainable sequence-to-sequence model
pub trait Model {
    /// Switch between training and evaluation behaviour
    fn set_mode(&mut self, mode: Mode);

    /// Write the full parameter state to `path`
    fn save_parameters(&self, path: &Path) -> Result<()>;

    /// Apply initialization parameters before the first batch
    fn initialize(&mut self, _options: &RuntimeOptions) -> Result<()> {
        Ok(())
    }
}
