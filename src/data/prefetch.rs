//! Background prefetching loader
//!
//! Each epoch spawns one worker thread that pulls from a [`BatchSource`] and
//! pushes into a bounded channel, so at most `capacity` batches sit in memory
//! ahead of the training loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::bounded;

use super::loader::{BatchIter, DataLoader};
use crate::config::DataConfig;
use crate::error::{Error, Result};

/// A restartable batch producer that can run on a worker thread
pub trait BatchSource: Send + Sync + 'static {
    /// Batch type produced
    type Batch: Send + 'static;

    /// Iterate one epoch of batches
    fn epoch(&self) -> Result<Box<dyn Iterator<Item = Result<Self::Batch>> + Send + '_>>;
}

struct Worker {
    handle: JoinHandle<()>,
    stop: Arc<AtomicBool>,
}

/// Loader that prefetches batches on a background thread
pub struct PrefetchLoader<S: BatchSource> {
    source: Arc<S>,
    capacity: usize,
    worker: Option<Worker>,
}

impl<S: BatchSource> PrefetchLoader<S> {
    /// Create a loader buffering up to `capacity` batches
    pub fn new(source: S, capacity: usize) -> Self {
        Self { source: Arc::new(source), capacity: capacity.max(1), worker: None }
    }

    /// Create a loader buffering `data.prefetch` batches
    pub fn from_config(source: S, data: &DataConfig) -> Self {
        Self::new(source, data.prefetch)
    }

    /// True while a worker thread is attached
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    fn stop_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.stop.store(true, Ordering::Relaxed);
            if worker.handle.join().is_err() {
                tracing::warn!("prefetch worker panicked");
            }
        }
    }
}

impl<S: BatchSource> DataLoader for PrefetchLoader<S> {
    type Batch = S::Batch;

    fn batches(&mut self) -> Result<BatchIter<'_, S::Batch>> {
        self.stop_worker();

        let (tx, rx) = bounded(self.capacity);
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);
        let source = Arc::clone(&self.source);

        let handle = thread::Builder::new()
            .name("kp-prefetch".to_string())
            .spawn(move || {
                let iter = match source.epoch() {
                    Ok(iter) => iter,
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        return;
                    }
                };
                for item in iter {
                    if worker_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    // receiver dropped: the epoch was abandoned
                    if tx.send(item).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| Error::io("spawning prefetch worker", e))?;

        self.worker = Some(Worker { handle, stop });
        Ok(Box::new(rx.into_iter()))
    }

    fn shutdown(&mut self) {
        self.stop_worker();
    }
}

impl<S: BatchSource> Drop for PrefetchLoader<S> {
    fn drop(&mut self) {
        self.stop_worker();
    }
}
