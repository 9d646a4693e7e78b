//! Scalar metrics for the training dashboard
//!
//! Every metric is a `(tag, value, step)` triple. The controller writes the
//! training loss at every step and the evaluation statistics at every save
//! boundary; tag layout lives in [`names`].

mod in_memory;
mod jsonl;
pub mod names;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use in_memory::InMemoryWriter;
pub use jsonl::{JsonlScalarWriter, SCALARS_FILE};

/// One scalar write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRecord {
    /// Metric tag, e.g. `loss` or `valid/macro_f1@10`
    pub tag: String,
    /// Metric value
    pub value: f64,
    /// Global training step
    pub step: u64,
    /// Unix time in seconds when the value was written
    pub wall_time: f64,
}

impl ScalarRecord {
    /// Create a record stamped with the current wall time
    pub fn now(tag: impl Into<String>, value: f64, step: u64) -> Self {
        let wall_time = chrono::Utc::now().timestamp_micros() as f64 / 1e6;
        Self { tag: tag.into(), value, step, wall_time }
    }
}

/// Sink for scalar metrics
pub trait MetricsWriter {
    /// Record `value` under `tag` at `step`
    fn add_scalar(&mut self, tag: &str, value: f64, step: u64) -> Result<()>;

    /// Flush buffered writes
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_record_now() {
        let record = ScalarRecord::now("loss", 0.25, 7);
        assert_eq!(record.tag, "loss");
        assert_eq!(record.step, 7);
        assert!(record.wall_time > 0.0);
    }
}
