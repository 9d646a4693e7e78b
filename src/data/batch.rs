//! Batch data structure

/// A keyphrase-generation batch: source token ids and target keyphrase ids
///
/// The controller never looks inside a batch; it hands each one to the
/// concrete trainer exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyphraseBatch {
    /// Source token-id sequences, one per example
    pub src_ids: Vec<Vec<u32>>,
    /// Target keyphrase token-id sequences, one per example
    pub target_ids: Vec<Vec<u32>>,
}

impl KeyphraseBatch {
    /// Create a new batch
    pub fn new(src_ids: Vec<Vec<u32>>, target_ids: Vec<Vec<u32>>) -> Self {
        Self { src_ids, target_ids }
    }

    /// Number of examples in the batch
    pub fn len(&self) -> usize {
        self.src_ids.len()
    }

    /// True when the batch holds no examples
    pub fn is_empty(&self) -> bool {
        self.src_ids.is_empty()
    }

    /// Source sequences right-padded with `pad_id` to the longest length
    pub fn padded_src(&self, pad_id: u32) -> Vec<Vec<u32>> {
        pad_to_longest(&self.src_ids, pad_id)
    }

    /// Target sequences right-padded with `pad_id` to the longest length
    pub fn padded_targets(&self, pad_id: u32) -> Vec<Vec<u32>> {
        pad_to_longest(&self.target_ids, pad_id)
    }
}

fn pad_to_longest(seqs: &[Vec<u32>], pad_id: u32) -> Vec<Vec<u32>> {
    let max_len = seqs.iter().map(Vec::len).max().unwrap_or(0);
    seqs.iter()
        .map(|seq| {
            let mut padded = seq.clone();
            padded.resize(max_len, pad_id);
            padded
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_creation() {
        let batch = KeyphraseBatch::new(vec![vec![4, 5, 6], vec![7]], vec![vec![8], vec![9, 10]]);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
        assert!(KeyphraseBatch::default().is_empty());
    }

    #[test]
    fn test_padding() {
        let batch = KeyphraseBatch::new(vec![vec![4, 5, 6], vec![7]], vec![vec![8], vec![9, 10]]);
        assert_eq!(batch.padded_src(0), vec![vec![4, 5, 6], vec![7, 0, 0]]);
        assert_eq!(batch.padded_targets(1), vec![vec![8, 1], vec![9, 10]]);
    }
}
