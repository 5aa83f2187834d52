// ============================================================
// Layer 4 — Class Balancer
// ============================================================
// Downsamples the majority class so class counts match exactly.
//
// Why balance?
//   A classifier trained on 10,000 negative and 400 positive
//   examples can reach 96% accuracy by always answering
//   "negative". Downsampling the majority class to the size
//   of the minority class removes that shortcut.
//
// Sampling semantics:
//   The reduced class is a uniformly random sample drawn
//   WITHOUT replacement — every element equally likely, no
//   duplicates, no particular order guarantee. The smaller
//   class passes through untouched.
//
// The RNG is injected by the caller so a fixed seed gives a
// reproducible sample. What happened is reported back in the
// returned outcome struct rather than printed — callers decide
// what to do with it; we also emit a tracing message.
//
// Two entry points:
//   balance()         — the two-class (positive/negative) contract
//   balance_classes() — generalisation to N class groups: every
//                       group is downsampled to the minimum
//                       observed group size
//
// Reference: Rust Book §10 (Generic Types)
//            rand crate documentation

use rand::seq::IteratorRandom;
use rand::Rng;

// ─── BalanceAction ────────────────────────────────────────────────────────────
/// What the balancer did, as return-value diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceAction {
    /// Both classes already had equal counts — nothing changed
    AlreadyBalanced,
    /// The positive class was downsampled to this size
    ReducedPositive(usize),
    /// The negative class was downsampled to this size
    ReducedNegative(usize),
}

/// The result of a two-class balance: both (possibly reduced)
/// sequences plus a record of which side was touched.
#[derive(Debug)]
pub struct BalanceOutcome<T> {
    pub positive: Vec<T>,
    pub negative: Vec<T>,
    pub action:   BalanceAction,
}

// ─── Two-class balance ────────────────────────────────────────────────────────
/// Balance positive against negative examples.
///
/// The longer side is replaced by a uniform without-replacement
/// sample of size min(len_p, len_n); the shorter side is returned
/// byte-for-byte unchanged. Zero-length inputs are valid — the
/// target degenerates to 0 and both outputs come back empty.
pub fn balance<T, R: Rng>(positive: Vec<T>, negative: Vec<T>, rng: &mut R) -> BalanceOutcome<T> {
    let num_pos = positive.len();
    let num_neg = negative.len();
    let target  = num_pos.min(num_neg);

    let (positive, negative, action) = if num_pos == num_neg {
        tracing::info!("training set is already balanced ({} per class)", target);
        (positive, negative, BalanceAction::AlreadyBalanced)
    } else if num_neg > target {
        tracing::info!("balanced training set by reducing the negative class to {}", target);
        let sampled = sample_without_replacement(negative, target, rng);
        (positive, sampled, BalanceAction::ReducedNegative(target))
    } else {
        tracing::info!("balanced training set by reducing the positive class to {}", target);
        let sampled = sample_without_replacement(positive, target, rng);
        (sampled, negative, BalanceAction::ReducedPositive(target))
    };

    BalanceOutcome { positive, negative, action }
}

// ─── N-class balance ──────────────────────────────────────────────────────────
/// Which classes were reduced, and from what size, during an
/// N-class balance. Classes already at the minimum are not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBalanceReport {
    /// The per-class count every group was brought down to
    pub kept_per_class: usize,
    /// (group index, original size) for each reduced group
    pub reduced: Vec<(usize, usize)>,
}

/// Balance N class groups by downsampling every group to the
/// minimum observed group size, each with a fresh uniform
/// without-replacement sample.
///
/// This generalises the two-class contract: with two groups it
/// reduces exactly the larger one. An empty `groups` slice is
/// valid and reports a minimum of 0.
pub fn balance_classes<T, R: Rng>(
    groups: Vec<Vec<T>>,
    rng:    &mut R,
) -> (Vec<Vec<T>>, ClassBalanceReport) {
    let kept_per_class = groups.iter().map(Vec::len).min().unwrap_or(0);

    let mut reduced   = Vec::new();
    let mut balanced  = Vec::with_capacity(groups.len());

    for (idx, group) in groups.into_iter().enumerate() {
        if group.len() > kept_per_class {
            reduced.push((idx, group.len()));
            balanced.push(sample_without_replacement(group, kept_per_class, rng));
        } else {
            balanced.push(group);
        }
    }

    if reduced.is_empty() {
        tracing::info!("classes already balanced ({} per class)", kept_per_class);
    } else {
        for (idx, from) in &reduced {
            tracing::info!(
                "balanced class {} by reducing {} -> {}",
                idx, from, kept_per_class
            );
        }
    }

    (balanced, ClassBalanceReport { kept_per_class, reduced })
}

/// Uniform sample of `amount` items without replacement.
/// choose_multiple is reservoir sampling — every element is
/// equally likely and nothing is drawn twice.
fn sample_without_replacement<T, R: Rng>(items: Vec<T>, amount: usize, rng: &mut R) -> Vec<T> {
    items.into_iter().choose_multiple(rng, amount)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_equal_classes_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = balance(vec![1, 2, 3], vec![4, 5, 6], &mut rng);
        assert_eq!(out.positive, vec![1, 2, 3]);
        assert_eq!(out.negative, vec![4, 5, 6]);
        assert_eq!(out.action, BalanceAction::AlreadyBalanced);
    }

    #[test]
    fn test_larger_positive_is_reduced() {
        let mut rng = StdRng::seed_from_u64(7);
        let positive: Vec<usize> = (0..10).collect();
        let negative: Vec<usize> = (100..104).collect();

        let out = balance(positive.clone(), negative.clone(), &mut rng);

        assert_eq!(out.action, BalanceAction::ReducedPositive(4));
        assert_eq!(out.positive.len(), 4);
        // The shorter side is untouched
        assert_eq!(out.negative, negative);
        // Subset of the original, no duplicates introduced
        let mut seen = out.positive.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert!(out.positive.iter().all(|v| positive.contains(v)));
    }

    #[test]
    fn test_larger_negative_is_reduced() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = balance(vec![1, 2], vec![10, 20, 30, 40, 50], &mut rng);
        assert_eq!(out.action, BalanceAction::ReducedNegative(2));
        assert_eq!(out.positive, vec![1, 2]);
        assert_eq!(out.negative.len(), 2);
    }

    #[test]
    fn test_empty_side_degenerates_to_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = balance(Vec::<u32>::new(), vec![1, 2, 3], &mut rng);
        assert!(out.positive.is_empty());
        assert!(out.negative.is_empty());
        assert_eq!(out.action, BalanceAction::ReducedNegative(0));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let items: Vec<usize> = (0..50).collect();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = balance(items.clone(), vec![0, 1, 2], &mut rng_a);
        let b = balance(items, vec![0, 1, 2], &mut rng_b);

        assert_eq!(a.positive, b.positive);
    }

    #[test]
    fn test_n_class_balance_reduces_to_minimum() {
        let mut rng = StdRng::seed_from_u64(9);
        let groups = vec![
            (0..8).collect::<Vec<usize>>(),
            (0..3).collect(),
            (0..5).collect(),
        ];

        let (balanced, report) = balance_classes(groups, &mut rng);

        assert_eq!(report.kept_per_class, 3);
        assert!(balanced.iter().all(|g| g.len() == 3));
        // Groups 0 (size 8) and 2 (size 5) were reduced; group 1 was not
        assert_eq!(report.reduced, vec![(0, 8), (2, 5)]);
    }

    #[test]
    fn test_n_class_balance_already_balanced() {
        let mut rng = StdRng::seed_from_u64(9);
        let groups = vec![vec![1, 2], vec![3, 4]];
        let (balanced, report) = balance_classes(groups, &mut rng);
        assert_eq!(balanced, vec![vec![1, 2], vec![3, 4]]);
        assert!(report.reduced.is_empty());
    }
}
