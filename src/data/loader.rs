//! Data loader seam
//!
//! A loader hands out one pass over the training data per call to
//! [`DataLoader::batches`]. Whatever workers it runs are its own business,
//! but [`DataLoader::shutdown`] must release them; the controller calls it on
//! every exit path.

use crate::error::Result;

/// One epoch of batches; an `Err` item is fatal to the run
pub type BatchIter<'a, B> = Box<dyn Iterator<Item = Result<B>> + 'a>;

/// A restartable source of training batches
pub trait DataLoader {
    /// Batch type handed to the trainer
    type Batch;

    /// Start a fresh pass over the data
    fn batches(&mut self) -> Result<BatchIter<'_, Self::Batch>>;

    /// Release worker resources. Must be idempotent.
    fn shutdown(&mut self) {}
}

/// In-memory loader replaying the same batches every epoch
#[derive(Clone, Debug)]
pub struct VecLoader<B> {
    batches: Vec<B>,
    passes: usize,
    shut_down: bool,
}

impl<B: Clone> VecLoader<B> {
    /// Create a loader over `batches`
    pub fn new(batches: Vec<B>) -> Self {
        Self { batches, passes: 0, shut_down: false }
    }

    /// Number of epochs started
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether `shutdown` has been called
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Batches per epoch
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// True when there are no batches
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl<B: Clone> DataLoader for VecLoader<B> {
    type Batch = B;

    fn batches(&mut self) -> Result<BatchIter<'_, B>> {
        self.passes += 1;
        Ok(Box::new(self.batches.iter().cloned().map(Ok)))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_loader_replays() {
        let mut loader = VecLoader::new(vec![1, 2, 3]);

        let first: Vec<i32> = loader.batches().unwrap().map(|b| b.unwrap()).collect();
        let second: Vec<i32> = loader.batches().unwrap().map(|b| b.unwrap()).collect();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
        assert_eq!(loader.passes(), 2);
        assert_eq!(loader.len(), 3);
    }

    #[test]
    fn test_vec_loader_shutdown() {
        let mut loader = VecLoader::new(Vec::<u8>::new());
        assert!(loader.is_empty());
        loader.shutdown();
        loader.shutdown();
        assert!(loader.is_shut_down());
    }
}
