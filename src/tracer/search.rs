//! Searching tracers
//!
//! Targets arrive as user text; [`parse_target`] rejects anything that is not a
//! well-formed integer before a trace is started.

use crate::errors::TraceError;
use crate::snapshot::{ArraySnapshot, Marks, TraceRecorder};

/// Parse a search target, rejecting empty or non-numeric text
pub fn parse_target(raw: &str) -> Result<i64, TraceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TraceError::invalid_input(raw, "a search value is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|e| TraceError::invalid_input(raw, e.to_string()))
}

/// Left-to-right scan that stops at the first match
pub fn linear(values: &[i64], target: i64) -> Vec<ArraySnapshot> {
    let mut rec = TraceRecorder::new(values);
    rec.record(Marks::none());
    if rec.is_empty() {
        return rec.finish();
    }

    for i in 0..rec.len() {
        rec.compare();
        rec.record(Marks::comparing(&[i]));
        if rec.get(i) == target {
            rec.record(Marks::comparing(&[i]).with_found(i));
            return rec.finish();
        }
    }

    rec.record(Marks::none());
    rec.finish()
}

/// Binary search over an ascending copy of the input.
///
/// Every snapshot carries the same sorted array, so `range` and `comparing`
/// index into that copy rather than the caller's order.
pub fn binary(values: &[i64], target: i64) -> Vec<ArraySnapshot> {
    let mut sorted = values.to_vec();
    sorted.sort();

    let mut rec = TraceRecorder::new(&sorted);
    rec.record(Marks::none());
    if rec.is_empty() {
        return rec.finish();
    }

    // Half-open window `lo..hi`; snapshots report it inclusively
    let mut lo = 0;
    let mut hi = rec.len();

    while lo < hi {
        let left = lo;
        let right = hi - 1;
        let mid = (left + right) / 2;

        rec.compare();
        rec.record(Marks::comparing(&[mid]).with_range(left, right));

        let value = rec.get(mid);
        if value == target {
            rec.record(Marks::comparing(&[mid]).with_found(mid));
            return rec.finish();
        } else if value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    rec.record(Marks::none());
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" 42 "), Ok(42));
        assert_eq!(parse_target("-7"), Ok(-7));
        assert!(matches!(
            parse_target(""),
            Err(TraceError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_target("12abc"),
            Err(TraceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_linear_stops_at_first_match() {
        let snapshots = linear(&[4, 9, 9, 1], 9);
        let end = snapshots.last().expect("non-empty");
        assert_eq!(end.found, Some(1));
        assert_eq!(end.comparisons, 2);
        // baseline, two comparisons, found
        assert_eq!(snapshots.len(), 4);
    }

    #[test]
    fn test_binary_window_shrinks() {
        let snapshots = binary(&[9, 7, 5, 3, 1], 9);
        let windows: Vec<_> = snapshots.iter().filter_map(|s| s.range).collect();
        assert_eq!(windows, vec![(0, 4), (3, 4), (4, 4)]);
        assert_eq!(snapshots.last().and_then(|s| s.found), Some(4));
    }

    #[test]
    fn test_empty_input() {
        for snapshots in [linear(&[], 3), binary(&[], 3)] {
            assert_eq!(snapshots.len(), 1);
            assert_eq!(snapshots[0].found_index(), -1);
            assert_eq!(snapshots[0].comparisons, 0);
        }
    }
}
