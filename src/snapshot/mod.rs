//! Snapshot model for step-by-step playback
//!
//! A [`Trace`] is the fully materialized output of one tracer run. Every
//! snapshot owns its data outright, so any index can be inspected in any order
//! without affecting the others.

pub mod recorder;
pub mod tree;

pub use recorder::{Marks, TraceRecorder};
pub use tree::{TreeNode, TreeSnapshot, TreeTrace};

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// One instant of an array-based algorithm (sorts and searches)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArraySnapshot {
    pub array: Vec<i64>,
    /// Up to two indices under comparison
    pub comparing: Vec<usize>,
    pub active: Vec<usize>,
    /// Indices in final position; grows monotonically within a trace
    pub sorted: BTreeSet<usize>,
    /// Inclusive range under a merge
    pub merging: Option<(usize, usize)>,
    /// `(start, mid, end)` of a merge sort split
    pub dividing: Option<(usize, usize, usize)>,
    pub pivot: Option<usize>,
    /// Inclusive binary search window
    pub range: Option<(usize, usize)>,
    pub swapped: bool,
    pub found: Option<usize>,
    pub comparisons: usize,
    pub swaps: usize,
}

impl ArraySnapshot {
    /// Found index, or `-1` when the target has not been located
    pub fn found_index(&self) -> i64 {
        self.found.map_or(-1, |i| i as i64)
    }

    /// Whether every index of the array is marked sorted
    pub fn is_fully_sorted(&self) -> bool {
        self.sorted.len() == self.array.len()
    }

    /// Check that `array` holds exactly the same multiset of values as `original`
    pub fn preserves_multiset(&self, original: &[i64]) -> bool {
        if self.array.len() != original.len() {
            return false;
        }

        let mut counts: FxHashMap<i64, isize> = FxHashMap::default();
        for &v in original {
            *counts.entry(v).or_insert(0) += 1;
        }
        for &v in &self.array {
            *counts.entry(v).or_insert(0) -= 1;
        }
        counts.values().all(|&c| c == 0)
    }
}

impl fmt::Display for ArraySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} cmp={} swp={}",
            self.array, self.comparisons, self.swaps
        )?;
        if !self.comparing.is_empty() {
            write!(f, " comparing={:?}", self.comparing)?;
        }
        if let Some(p) = self.pivot {
            write!(f, " pivot={}", p)?;
        }
        if let Some((lo, hi)) = self.merging {
            write!(f, " merging=[{}, {}]", lo, hi)?;
        }
        if let Some((start, mid, end)) = self.dividing {
            write!(f, " dividing=[{}, {}, {}]", start, mid, end)?;
        }
        if let Some((lo, hi)) = self.range {
            write!(f, " range=[{}, {}]", lo, hi)?;
        }
        if self.swapped {
            write!(f, " swapped")?;
        }
        if let Some(i) = self.found {
            write!(f, " found={}", i)?;
        }
        if !self.sorted.is_empty() {
            write!(f, " sorted={:?}", self.sorted)?;
        }
        Ok(())
    }
}

/// Cumulative counters read from a single snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    pub comparisons: usize,
    pub swaps: usize,
}

/// A complete, immutable trace produced by one tracer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    Array(Vec<ArraySnapshot>),
    Tree(TreeTrace),
}

impl Trace {
    /// Number of snapshots (always at least one for a generated trace)
    pub fn len(&self) -> usize {
        match self {
            Trace::Array(snapshots) => snapshots.len(),
            Trace::Tree(trace) => trace.snapshots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn array_snapshot(&self, index: usize) -> Option<&ArraySnapshot> {
        match self {
            Trace::Array(snapshots) => snapshots.get(index),
            Trace::Tree(_) => None,
        }
    }

    pub fn tree_snapshot(&self, index: usize) -> Option<&TreeSnapshot> {
        match self {
            Trace::Array(_) => None,
            Trace::Tree(trace) => trace.snapshots.get(index),
        }
    }

    /// Counters as of the snapshot at `index` (zero when out of range)
    pub fn metrics_at(&self, index: usize) -> Metrics {
        match self {
            Trace::Array(snapshots) => snapshots
                .get(index)
                .map(|s| Metrics {
                    comparisons: s.comparisons,
                    swaps: s.swaps,
                })
                .unwrap_or_default(),
            Trace::Tree(trace) => trace
                .snapshots
                .get(index)
                .map(|s| Metrics {
                    comparisons: s.comparisons,
                    swaps: 0,
                })
                .unwrap_or_default(),
        }
    }

    /// One human-readable line per snapshot
    pub fn describe(&self) -> Vec<String> {
        match self {
            Trace::Array(snapshots) => snapshots.iter().map(|s| s.to_string()).collect(),
            Trace::Tree(trace) => trace.snapshots.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_index_sentinel() {
        let mut snapshot = ArraySnapshot::default();
        assert_eq!(snapshot.found_index(), -1);
        snapshot.found = Some(3);
        assert_eq!(snapshot.found_index(), 3);
    }

    #[test]
    fn test_preserves_multiset() {
        let snapshot = ArraySnapshot {
            array: vec![1, 2, 2, 3],
            ..Default::default()
        };
        assert!(snapshot.preserves_multiset(&[2, 3, 2, 1]));
        assert!(!snapshot.preserves_multiset(&[2, 3, 3, 1]));
        assert!(!snapshot.preserves_multiset(&[2, 3, 1]));
    }

    #[test]
    fn test_metrics_out_of_range() {
        let trace = Trace::Array(vec![ArraySnapshot::default()]);
        assert_eq!(trace.metrics_at(5), Metrics::default());
    }
}
