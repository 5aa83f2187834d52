// ============================================================
// Layer 3 — Label Containers
// ============================================================
// Explicit typed containers for the two label representations:
//
//   ClassLabels  — a sequence of integer class indices,
//                  one per example, as parsed from label files
//   OneHotMatrix — the encoded form: one row per example,
//                  exactly one 1 per row, all rows of equal width
//
// Why not just Vec<usize> and Vec<Vec<u8>>?
//   Using distinct types makes it impossible to hand the
//   batcher a raw label sequence where an encoded matrix is
//   expected. The compiler enforces the pipeline order.
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §10 (Generic Types and Newtypes)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ─── ClassLabels ──────────────────────────────────────────────────────────────
/// An ordered sequence of integer class indices, positionally
/// paired with a text collection of the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLabels {
    values: Vec<usize>,
}

impl ClassLabels {
    /// Wrap a vector of class indices
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// Number of labels (= number of examples)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the underlying indices
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// The set of distinct class indices observed, in ascending order.
    /// BTreeSet keeps them sorted and deduplicated for us.
    pub fn distinct(&self) -> Vec<usize> {
        self.values
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of distinct classes observed across the whole sequence
    pub fn num_classes(&self) -> usize {
        self.distinct().len()
    }

    /// How many examples carry each class index.
    /// Returns (class, count) pairs in ascending class order.
    pub fn class_counts(&self) -> Vec<(usize, usize)> {
        self.distinct()
            .into_iter()
            .map(|c| (c, self.values.iter().filter(|&&v| v == c).count()))
            .collect()
    }
}

// ─── OneHotMatrix ─────────────────────────────────────────────────────────────
/// One-hot encoded labels: one row per example, width = num_classes,
/// exactly one 1 per row.
///
/// Constructed by the encoder (data layer) — the encoder is the only
/// place that checks labels against the observed class range, so by
/// the time a matrix exists its row invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotMatrix {
    rows: Vec<Vec<u8>>,
    num_classes: usize,
}

impl OneHotMatrix {
    /// Build a matrix from pre-encoded rows.
    ///
    /// # Panics
    /// Panics if any row's width differs from `num_classes` —
    /// that would be an encoder bug, not a data error.
    pub fn new(rows: Vec<Vec<u8>>, num_classes: usize) -> Self {
        assert!(
            rows.iter().all(|r| r.len() == num_classes),
            "every one-hot row must have width {}",
            num_classes
        );
        Self { rows, num_classes }
    }

    /// Number of encoded rows (= number of examples)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every row
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// The one-hot row at position `index`, if any
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.rows.get(index).map(|r| r.as_slice())
    }
}
