//! Step-trace generation
//!
//! This module turns a dataset into a fully materialized [`Trace`]:
//! - [`sort`]: bubble, selection, insertion, quick and merge sort
//! - [`search`]: linear and binary search
//! - [`tree`]: binary search tree insertion
//!
//! # Determinism
//!
//! Every tracer is a pure function of its input: tracing the same dataset with
//! the same algorithm twice yields identical snapshot sequences.

pub mod search;
pub mod sort;
pub mod tree;

use crate::errors::TraceError;
use crate::snapshot::Trace;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Broad family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sort,
    Search,
    Tree,
}

/// Asymptotic cost summary shown alongside a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
    pub best: &'static str,
    pub worst: &'static str,
    pub description: &'static str,
}

/// The fixed algorithm catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Linear,
    Binary,
    Bst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Bst,
    ];

    /// Identifier accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
            Algorithm::Bst => "bst",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
            Algorithm::Bst => "BST Insert",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::Bubble
            | Algorithm::Selection
            | Algorithm::Insertion
            | Algorithm::Quick
            | Algorithm::Merge => AlgorithmKind::Sort,
            Algorithm::Linear | Algorithm::Binary => AlgorithmKind::Search,
            Algorithm::Bst => AlgorithmKind::Tree,
        }
    }

    pub fn needs_target(self) -> bool {
        self.kind() == AlgorithmKind::Search
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::Bubble => Complexity {
                time: "O(n²)",
                space: "O(1)",
                best: "O(n)",
                worst: "O(n²)",
                description: "Repeatedly swaps adjacent elements if they are in wrong order",
            },
            Algorithm::Selection => Complexity {
                time: "O(n²)",
                space: "O(1)",
                best: "O(n²)",
                worst: "O(n²)",
                description: "Finds minimum element and places it at beginning",
            },
            Algorithm::Insertion => Complexity {
                time: "O(n²)",
                space: "O(1)",
                best: "O(n)",
                worst: "O(n²)",
                description: "Builds final sorted array one item at a time",
            },
            Algorithm::Quick => Complexity {
                time: "O(n log n)",
                space: "O(log n)",
                best: "O(n log n)",
                worst: "O(n²)",
                description: "Divides array using pivot and recursively sorts",
            },
            Algorithm::Merge => Complexity {
                time: "O(n log n)",
                space: "O(n)",
                best: "O(n log n)",
                worst: "O(n log n)",
                description: "Divides array into halves, sorts and merges them",
            },
            Algorithm::Linear => Complexity {
                time: "O(n)",
                space: "O(1)",
                best: "O(1)",
                worst: "O(n)",
                description: "Sequentially checks each element until found",
            },
            Algorithm::Binary => Complexity {
                time: "O(log n)",
                space: "O(1)",
                best: "O(1)",
                worst: "O(log n)",
                description: "Repeatedly divides sorted array in half",
            },
            Algorithm::Bst => Complexity {
                time: "O(log n)",
                space: "O(n)",
                best: "O(log n)",
                worst: "O(n)",
                description: "Binary search tree with left < parent < right",
            },
        }
    }

    /// Generate the complete trace for `values`.
    ///
    /// Search algorithms require `target`; a missing or malformed target fails
    /// with [`TraceError::InvalidInput`] before anything is traced. Other
    /// algorithms ignore it.
    pub fn trace(self, values: &[i64], target: Option<&str>) -> Result<Trace, TraceError> {
        let trace = match self {
            Algorithm::Bubble => Trace::Array(sort::bubble(values)),
            Algorithm::Selection => Trace::Array(sort::selection(values)),
            Algorithm::Insertion => Trace::Array(sort::insertion(values)),
            Algorithm::Quick => Trace::Array(sort::quick(values)),
            Algorithm::Merge => Trace::Array(sort::merge(values)),
            Algorithm::Linear | Algorithm::Binary => {
                let target = search::parse_target(target.unwrap_or(""))?;
                if self == Algorithm::Linear {
                    Trace::Array(search::linear(values, target))
                } else {
                    Trace::Array(search::binary(values, target))
                }
            }
            Algorithm::Bst => Trace::Tree(tree::trace(values)),
        };

        debug!(
            algorithm = self.id(),
            input_len = values.len(),
            snapshots = trace.len(),
            "generated trace"
        );
        Ok(trace)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.id() == wanted)
            .ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_identifier() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("  Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert!(matches!(
            "heap".parse::<Algorithm>(),
            Err(TraceError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_cycle_visits_all() {
        let mut algorithm = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Bst);
    }

    #[test]
    fn test_search_requires_target() {
        assert!(matches!(
            Algorithm::Linear.trace(&[1, 2], None),
            Err(TraceError::InvalidInput { .. })
        ));
        assert!(matches!(
            Algorithm::Binary.trace(&[1, 2], Some("two")),
            Err(TraceError::InvalidInput { .. })
        ));
        assert!(Algorithm::Bubble.trace(&[1, 2], None).is_ok());
    }
}
