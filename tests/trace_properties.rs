//! Property-based invariant tests for generated traces.
//!
//! These hold for any dataset:
//!
//! 1. Every sort ends on the ascending permutation of its input.
//! 2. Every sort snapshot holds a permutation of the input.
//! 3. Comparison and swap counters never decrease, for sorts and searches.
//! 4. The sorted set only grows.
//! 5. Highlighted indices stay inside the array.
//! 6. A `swapped` snapshot always follows a move or a counted write.
//! 7. Searches report a match exactly when the target is present, and never
//!    move or count a swap.
//! 8. BST in-order traversal is the sorted, de-duplicated input.
//! 9. Generation is deterministic.

use algotty::snapshot::{ArraySnapshot, Trace};
use algotty::tracer::{tree, Algorithm};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const SEARCHES: [Algorithm; 2] = [Algorithm::Linear, Algorithm::Binary];

const SORTS: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Quick,
    Algorithm::Merge,
];

fn dataset_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..100, 0..24)
}

fn array_snapshots(algorithm: Algorithm, values: &[i64], target: Option<&str>) -> Vec<ArraySnapshot> {
    match algorithm.trace(values, target) {
        Ok(Trace::Array(snapshots)) => snapshots,
        other => panic!("{} did not produce an array trace: {:?}", algorithm, other),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-5. Sort invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sorts_end_sorted(values in dataset_strategy()) {
        let mut expected = values.clone();
        expected.sort();
        for algorithm in SORTS {
            let snapshots = array_snapshots(algorithm, &values, None);
            let last = snapshots.last().expect("never empty");
            prop_assert_eq!(&last.array, &expected, "{}", algorithm);
            prop_assert!(last.is_fully_sorted(), "{}", algorithm);
            prop_assert_eq!(&snapshots[0].array, &values);
        }
    }

    #[test]
    fn sorts_preserve_multiset(values in dataset_strategy()) {
        for algorithm in SORTS {
            for (i, snapshot) in array_snapshots(algorithm, &values, None).iter().enumerate() {
                prop_assert!(
                    snapshot.preserves_multiset(&values),
                    "{} step {} holds {:?}",
                    algorithm,
                    i,
                    snapshot.array
                );
            }
        }
    }

    #[test]
    fn counters_and_sorted_set_are_monotone(values in dataset_strategy()) {
        for algorithm in SORTS {
            let snapshots = array_snapshots(algorithm, &values, None);
            for pair in snapshots.windows(2) {
                prop_assert!(pair[0].comparisons <= pair[1].comparisons, "{}", algorithm);
                prop_assert!(pair[0].swaps <= pair[1].swaps, "{}", algorithm);
                prop_assert!(pair[0].sorted.is_subset(&pair[1].sorted), "{}", algorithm);
            }
        }
    }

    #[test]
    fn swapped_follows_a_write(values in dataset_strategy()) {
        for algorithm in SORTS {
            let snapshots = array_snapshots(algorithm, &values, None);
            prop_assert!(!snapshots[0].swapped, "{} baseline", algorithm);
            for (i, pair) in snapshots.windows(2).enumerate() {
                if pair[1].swapped {
                    prop_assert!(
                        pair[0].array != pair[1].array || pair[0].swaps < pair[1].swaps,
                        "{} step {} is marked swapped without a write",
                        algorithm,
                        i + 1
                    );
                }
            }
        }
    }

    #[test]
    fn highlights_stay_in_bounds(values in dataset_strategy()) {
        for algorithm in SORTS {
            for snapshot in array_snapshots(algorithm, &values, None) {
                let n = snapshot.array.len();
                prop_assert!(snapshot.comparing.iter().all(|&i| i < n));
                prop_assert!(snapshot.active.iter().all(|&i| i < n));
                prop_assert!(snapshot.sorted.iter().all(|&i| i < n));
                prop_assert!(snapshot.pivot.map_or(true, |p| p < n));
                if let Some((lo, hi)) = snapshot.merging {
                    prop_assert!(lo <= hi && hi < n);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3, 7. Search counters and arrays
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn search_counters_are_monotone(values in dataset_strategy(), target in -50i64..100) {
        let raw = target.to_string();
        for algorithm in SEARCHES {
            let snapshots = array_snapshots(algorithm, &values, Some(&raw));
            prop_assert_eq!((snapshots[0].comparisons, snapshots[0].swaps), (0, 0));
            for pair in snapshots.windows(2) {
                prop_assert!(pair[0].comparisons <= pair[1].comparisons, "{}", algorithm);
                prop_assert_eq!(pair[1].swaps, 0, "{}", algorithm);
            }
            // One comparison per probed index, never more than the input length
            let last = snapshots.last().expect("never empty");
            prop_assert!(last.comparisons <= values.len(), "{}", algorithm);
        }
    }

    #[test]
    fn search_arrays_are_fixed_permutations(values in dataset_strategy(), target in -50i64..100) {
        let raw = target.to_string();
        for algorithm in SEARCHES {
            let snapshots = array_snapshots(algorithm, &values, Some(&raw));
            let first = snapshots[0].array.clone();
            for snapshot in &snapshots {
                prop_assert!(snapshot.preserves_multiset(&values), "{}", algorithm);
                prop_assert_eq!(&snapshot.array, &first, "{}", algorithm);
                prop_assert!(!snapshot.swapped, "{}", algorithm);
            }
            if algorithm == Algorithm::Linear {
                prop_assert_eq!(&first, &values);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Search correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_search_finds_first_match(values in dataset_strategy(), target in -50i64..100) {
        let raw = target.to_string();
        let snapshots = array_snapshots(Algorithm::Linear, &values, Some(&raw));
        let last = snapshots.last().expect("never empty");
        let expected = values.iter().position(|&v| v == target).map_or(-1, |i| i as i64);
        prop_assert_eq!(last.found_index(), expected);
    }

    #[test]
    fn binary_search_agrees_with_contains(values in dataset_strategy(), target in -50i64..100) {
        let raw = target.to_string();
        let snapshots = array_snapshots(Algorithm::Binary, &values, Some(&raw));
        let last = snapshots.last().expect("never empty");
        match last.found {
            Some(index) => prop_assert_eq!(last.array[index], target),
            None => prop_assert!(!values.contains(&target)),
        }
        for snapshot in &snapshots {
            if let Some((lo, hi)) = snapshot.range {
                prop_assert!(lo <= hi && hi < snapshot.array.len());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8-9. Tree shape and determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bst_in_order_is_sorted_unique(values in dataset_strategy()) {
        let result = tree::trace(&values);
        let mut expected = values.clone();
        expected.sort();
        expected.dedup();

        let in_order = result.final_tree.as_ref().map(|t| t.in_order()).unwrap_or_default();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(result.snapshots.len(), values.len().max(1));
        for pair in result.snapshots.windows(2) {
            prop_assert!(pair[0].comparisons <= pair[1].comparisons);
        }
    }

    #[test]
    fn generation_is_deterministic(values in dataset_strategy(), target in -50i64..100) {
        let raw = target.to_string();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(
                algorithm.trace(&values, Some(&raw)),
                algorithm.trace(&values, Some(&raw))
            );
        }
    }
}
