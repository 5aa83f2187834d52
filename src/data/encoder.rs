// ============================================================
// Layer 4 — One-Hot Label Encoder
// ============================================================
// Converts integer class labels into one-hot vectors.
//
// The matrix width is the number of DISTINCT class values
// observed across the whole label sequence. Labels are assumed
// to be the indices 0..num_classes — a label value that falls
// outside that range (e.g. labels {0, 2} where 2 >= 2 distinct
// classes) means the label file skipped a class index, and we
// fail fast with InvalidArgument instead of writing past the
// row width.
//
// Example: [1, 0, 1] → two distinct classes →
//          [[0,1], [1,0], [0,1]]
//
// Reference: Rust Book §8 (Vectors)

use crate::data::error::DataError;
use crate::domain::labels::{ClassLabels, OneHotMatrix};

/// Encode integer labels as a one-hot matrix.
///
/// Empty input yields an empty matrix with zero classes — valid,
/// not an error.
pub fn one_hot(labels: &ClassLabels) -> Result<OneHotMatrix, DataError> {
    let num_classes = labels.num_classes();

    let mut rows = Vec::with_capacity(labels.len());
    for &value in labels.values() {
        if value >= num_classes {
            return Err(DataError::InvalidArgument(format!(
                "label value {} is outside the observed class range 0..{} — \
                 class indices must be contiguous from 0",
                value, num_classes
            )));
        }
        let mut row = vec![0u8; num_classes];
        row[value] = 1;
        rows.push(row);
    }

    Ok(OneHotMatrix::new(rows, num_classes))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_class_encoding() {
        let m = one_hot(&ClassLabels::new(vec![1, 0, 1])).unwrap();
        assert_eq!(m.num_classes(), 2);
        assert_eq!(m.row(0), Some(&[0u8, 1][..]));
        assert_eq!(m.row(1), Some(&[1u8, 0][..]));
        assert_eq!(m.row(2), Some(&[0u8, 1][..]));
    }

    #[test]
    fn test_three_class_encoding() {
        let m = one_hot(&ClassLabels::new(vec![2, 0, 1])).unwrap();
        assert_eq!(m.num_classes(), 3);
        assert_eq!(m.row(0), Some(&[0u8, 0, 1][..]));
        // Every row has exactly one 1
        for i in 0..m.len() {
            let ones = m.row(i).unwrap().iter().filter(|&&v| v == 1).count();
            assert_eq!(ones, 1);
        }
    }

    #[test]
    fn test_skipped_class_index_fails_fast() {
        // Labels {0, 2}: two distinct values but 2 >= 2 → class 1 missing
        let err = one_hot(&ClassLabels::new(vec![0, 2])).unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_labels_give_empty_matrix() {
        let m = one_hot(&ClassLabels::default()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.num_classes(), 0);
    }
}
