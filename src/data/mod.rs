//! Batches, vocabulary and data loaders

mod batch;
mod loader;
mod prefetch;
mod vocab;

pub use batch::KeyphraseBatch;
pub use loader::{BatchIter, DataLoader, VecLoader};
pub use prefetch::{BatchSource, PrefetchLoader};
pub use vocab::{Vocabulary, PAD_WORD, UNK_WORD};
