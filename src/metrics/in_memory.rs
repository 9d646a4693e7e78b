//! In-memory metrics writer

use std::sync::{Arc, Mutex, PoisonError};

use super::{MetricsWriter, ScalarRecord};
use crate::error::Result;

/// Shared in-memory writer
///
/// Clones share one buffer, so a caller can keep a handle to read back what
/// the controller wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWriter {
    records: Arc<Mutex<Vec<ScalarRecord>>>,
}

impl InMemoryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record written so far
    pub fn records(&self) -> Vec<ScalarRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// `(step, value)` pairs written under `tag`, in write order
    pub fn values(&self, tag: &str) -> Vec<(u64, f64)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.tag == tag)
            .map(|r| (r.step, r.value))
            .collect()
    }

    /// Distinct tags in first-write order
    pub fn tags(&self) -> Vec<String> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<String> = Vec::new();
        for r in records.iter() {
            if !tags.contains(&r.tag) {
                tags.push(r.tag.clone());
            }
        }
        tags
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MetricsWriter for InMemoryWriter {
    fn add_scalar(&mut self, tag: &str, value: f64, step: u64) -> Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ScalarRecord::now(tag, value, step));
        Ok(())
    }
}
