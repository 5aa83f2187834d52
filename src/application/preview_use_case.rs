// ============================================================
// Layer 2 — PreviewUseCase
// ============================================================
// Builds the dataset and drives the batch iterator the way an
// external training loop would, printing batch shapes instead
// of training anything:
//   1. Build the dataset (same pipeline as `prepare`)
//   2. Hand its examples to the batch iterator
//   3. Consume the first few batches and report their sizes
//
// Useful for sanity-checking batch parameters before a long
// training run: how many batches per epoch, how big the tail
// batch is, whether shuffling is on.

use anyhow::Result;

use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase};
use crate::data::batcher::BatchIter;

// ─── Preview Configuration ────────────────────────────────────────────────────
/// Batch parameters for a preview run, on top of the prepare config.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub prepare:    PrepareConfig,
    pub batch_size: usize,
    pub num_epochs: usize,
    pub shuffle:    bool,
    /// How many batches to print before stopping early —
    /// early termination of the lazy sequence is always safe
    pub limit:      usize,
}

/// One previewed batch, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// 1-based epoch this batch belongs to
    pub epoch: usize,
    /// 1-based batch number within the epoch
    pub batch: usize,
    /// Number of examples in the batch
    pub size:  usize,
}

// ─── PreviewUseCase ───────────────────────────────────────────────────────────
pub struct PreviewUseCase {
    config: PreviewConfig,
}

impl PreviewUseCase {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Build the dataset and consume up to `limit` batches.
    /// Returns a summary per consumed batch for the CLI to print.
    pub fn execute(&self) -> Result<Vec<BatchSummary>> {
        let cfg = &self.config;

        // ── Build the dataset without writing run artifacts ───────────────────
        let (dataset, _report) = PrepareUseCase::new(cfg.prepare.clone()).build_dataset()?;

        // ── Batch it exactly as a trainer would ───────────────────────────────
        let iter = BatchIter::new(
            dataset.examples(),
            cfg.batch_size,
            cfg.num_epochs,
            cfg.shuffle,
            cfg.prepare.seed,
        )?;
        let per_epoch = iter.batches_per_epoch();
        tracing::info!(
            "{} batches per epoch, {} total over {} epoch(s)",
            per_epoch,
            iter.total_batches(),
            cfg.num_epochs
        );

        // ── Consume the first `limit` batches ─────────────────────────────────
        let summaries = iter
            .take(cfg.limit)
            .enumerate()
            .map(|(i, batch)| BatchSummary {
                epoch: i / per_epoch.max(1) + 1,
                batch: i % per_epoch.max(1) + 1,
                size:  batch.len(),
            })
            .collect();

        Ok(summaries)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_preview_reports_tail_batch() {
        let dir = tempfile::tempdir().unwrap();
        let x = dir.path().join("x.txt");
        let y = dir.path().join("y.txt");
        // 5 examples, batch size 2 → batches of 2, 2, 1
        fs::write(&x, "a\nb\nc\nd\ne\n").unwrap();
        fs::write(&y, "0\n1\n0\n1\n0\n").unwrap();

        let cfg = PreviewConfig {
            prepare: PrepareConfig {
                text_files:  vec![x.display().to_string()],
                label_files: vec![y.display().to_string()],
                out_dir:     dir.path().join("out").display().to_string(),
                ..Default::default()
            },
            batch_size: 2,
            num_epochs: 1,
            shuffle:    false,
            limit:      10,
        };
        let summaries = PreviewUseCase::new(cfg).execute().unwrap();

        let sizes: Vec<usize> = summaries.iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(summaries[2].epoch, 1);
        assert_eq!(summaries[2].batch, 3);
    }

    #[test]
    fn test_limit_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let x = dir.path().join("x.txt");
        let y = dir.path().join("y.txt");
        fs::write(&x, "a\nb\nc\nd\n").unwrap();
        fs::write(&y, "0\n1\n0\n1\n").unwrap();

        let cfg = PreviewConfig {
            prepare: PrepareConfig {
                text_files:  vec![x.display().to_string()],
                label_files: vec![y.display().to_string()],
                out_dir:     dir.path().join("out").display().to_string(),
                ..Default::default()
            },
            batch_size: 1,
            num_epochs: 5,
            shuffle:    true,
            limit:      3,
        };
        let summaries = PreviewUseCase::new(cfg).execute().unwrap();
        // 20 batches exist but only 3 are consumed
        assert_eq!(summaries.len(), 3);
    }
}
