// ============================================================
// Layer 4 — Batch Iterator
// ============================================================
// Produces shuffled mini-batches for iterative training.
//
// How batching works here:
//   For each of num_epochs epochs:
//     1. Build a fresh uniformly random permutation of the
//        example ORDER (when shuffle is on; original order
//        otherwise — and every unshuffled epoch is identical)
//     2. Slice that order into consecutive batches of
//        batch_size elements
//     3. The last batch of the epoch holds the remainder —
//        it may be smaller than batch_size, never padded
//
// Batches per epoch = ceil(len / batch_size).
//
// The iterator owns a COPY of the data and permutes a private
// index vector, so the caller's collection is never reordered
// under it. It is lazy and single-pass: batches materialise one
// at a time, and dropping the iterator early is always safe —
// there is no cleanup and no state shared between instances.
//
// Randomness is an explicit parameter: pass a seed for
// reproducible shuffling, or None to draw from entropy.
//
// Reference: Rust Book §13 (Iterators)
//            rand crate documentation (StdRng, SliceRandom)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::error::DataError;

/// A lazy, finite iterator of mini-batches over a fixed dataset.
#[derive(Debug)]
pub struct BatchIter<T: Clone> {
    data: Vec<T>,
    batch_size: usize,
    num_epochs: usize,
    shuffle: bool,
    rng: StdRng,
    /// Permutation of 0..data.len(), reshuffled at each epoch start
    order: Vec<usize>,
    batches_per_epoch: usize,
    epoch: usize,
    batch: usize,
}

impl<T: Clone> BatchIter<T> {
    /// Create a batch iterator.
    ///
    /// `batch_size` must be positive — zero is rejected up front
    /// with InvalidArgument rather than looping forever. Empty
    /// `data` is valid and simply yields no batches at all.
    pub fn new(
        data: Vec<T>,
        batch_size: usize,
        num_epochs: usize,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidArgument(
                "batch_size must be positive".to_string(),
            ));
        }

        let n = data.len();
        // ceil(n / batch_size), and 0 batches for empty data
        let batches_per_epoch = n.div_ceil(batch_size);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            data,
            batch_size,
            num_epochs,
            shuffle,
            rng,
            order: (0..n).collect(),
            batches_per_epoch,
            epoch: 0,
            batch: 0,
        })
    }

    /// How many batches one epoch produces
    pub fn batches_per_epoch(&self) -> usize {
        self.batches_per_epoch
    }

    /// How many batches the whole iteration produces
    pub fn total_batches(&self) -> usize {
        self.batches_per_epoch * self.num_epochs
    }

    /// Reshuffle the index order for a new epoch.
    /// Fisher-Yates via SliceRandom — every permutation equally
    /// likely, and each epoch draws an independent one.
    fn begin_epoch(&mut self) {
        if self.shuffle {
            self.order.shuffle(&mut self.rng);
        }
    }
}

impl<T: Clone> Iterator for BatchIter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if self.epoch >= self.num_epochs {
                return None;
            }

            // Epoch rollover: all batches of this epoch consumed
            // (or the dataset is empty and every epoch is empty)
            if self.batch >= self.batches_per_epoch {
                self.epoch += 1;
                self.batch = 0;
                continue;
            }

            if self.batch == 0 {
                self.begin_epoch();
            }

            let start = self.batch * self.batch_size;
            let end = (start + self.batch_size).min(self.data.len());
            self.batch += 1;

            // Materialise the batch through the permuted order
            return Some(
                self.order[start..end]
                    .iter()
                    .map(|&i| self.data[i].clone())
                    .collect(),
            );
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unshuffled_batches_preserve_order() {
        // data = [0..9], batch_size = 3 → [0,1,2] [3,4,5] [6,7,8] [9]
        let data: Vec<usize> = (0..10).collect();
        let batches: Vec<Vec<usize>> =
            BatchIter::new(data, 3, 1, false, None).unwrap().collect();

        assert_eq!(batches.len(), 4);
        assert_eq!(batches[0], vec![0, 1, 2]);
        assert_eq!(batches[1], vec![3, 4, 5]);
        assert_eq!(batches[2], vec![6, 7, 8]);
        assert_eq!(batches[3], vec![9]);
    }

    #[test]
    fn test_total_batch_count_across_epochs() {
        // 10 items, batch 3, 4 epochs → 4 * ceil(10/3) = 16 batches
        let data: Vec<usize> = (0..10).collect();
        let iter = BatchIter::new(data, 3, 4, false, None).unwrap();
        assert_eq!(iter.batches_per_epoch(), 4);
        assert_eq!(iter.total_batches(), 16);
        assert_eq!(iter.count(), 16);
    }

    #[test]
    fn test_unshuffled_epoch_reconstructs_dataset() {
        let data: Vec<usize> = (0..7).collect();
        let batches: Vec<Vec<usize>> =
            BatchIter::new(data.clone(), 2, 3, false, None).unwrap().collect();

        // Each epoch's concatenation is exactly the original order
        for epoch in batches.chunks(4) {
            let flat: Vec<usize> = epoch.concat();
            assert_eq!(flat, data);
        }
    }

    #[test]
    fn test_exact_division_has_no_tail_batch() {
        let data: Vec<usize> = (0..6).collect();
        let batches: Vec<Vec<usize>> =
            BatchIter::new(data, 3, 1, false, None).unwrap().collect();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 3));
    }

    #[test]
    fn test_shuffled_epoch_is_a_permutation() {
        let data: Vec<usize> = (0..20).collect();
        let batches: Vec<Vec<usize>> =
            BatchIter::new(data.clone(), 6, 2, true, Some(11)).unwrap().collect();

        // 2 epochs of ceil(20/6) = 4 batches
        assert_eq!(batches.len(), 8);
        for epoch in batches.chunks(4) {
            let mut flat: Vec<usize> = epoch.concat();
            flat.sort_unstable();
            // Same multiset of elements, order may differ
            assert_eq!(flat, data);
        }
    }

    #[test]
    fn test_epochs_are_independently_permuted() {
        let data: Vec<usize> = (0..64).collect();
        let batches: Vec<Vec<usize>> =
            BatchIter::new(data, 64, 2, true, Some(5)).unwrap().collect();

        // One batch per epoch — with 64 elements, two identical
        // permutations in a row would be astronomically unlikely
        assert_eq!(batches.len(), 2);
        assert_ne!(batches[0], batches[1]);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let data: Vec<usize> = (0..30).collect();
        let a: Vec<Vec<usize>> =
            BatchIter::new(data.clone(), 7, 2, true, Some(99)).unwrap().collect();
        let b: Vec<Vec<usize>> =
            BatchIter::new(data, 7, 2, true, Some(99)).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let err = BatchIter::new(vec![1, 2, 3], 0, 1, false, None).unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_data_yields_no_batches() {
        let batches: Vec<Vec<usize>> =
            BatchIter::new(Vec::new(), 4, 3, true, Some(1)).unwrap().collect();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_batch_size_larger_than_data() {
        let batches: Vec<Vec<usize>> =
            BatchIter::new(vec![1, 2], 100, 2, false, None).unwrap().collect();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], vec![1, 2]);
    }

    #[test]
    fn test_source_data_not_reordered() {
        // The iterator permutes a private index vector, so the
        // caller's copy stays as-is even with shuffling on
        let data: Vec<usize> = (0..10).collect();
        let _: Vec<Vec<usize>> =
            BatchIter::new(data.clone(), 3, 1, true, Some(2)).unwrap().collect();
        assert_eq!(data, (0..10).collect::<Vec<usize>>());
    }
}
