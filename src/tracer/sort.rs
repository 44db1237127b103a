//! Sorting tracers
//!
//! Each tracer copies its input, records a baseline snapshot, and ends on a
//! snapshot whose `sorted` set covers every index. Inputs of length 0 or 1
//! produce only the baseline, already marked sorted.

use crate::snapshot::{ArraySnapshot, Marks, TraceRecorder};

/// Start a sort trace with its baseline snapshot. The flag is set when the
/// input is trivially sorted and the baseline is the whole trace.
fn begin(values: &[i64]) -> (TraceRecorder, bool) {
    let mut recorder = TraceRecorder::new(values);
    let trivial = recorder.len() <= 1;
    if trivial {
        recorder.mark_all_sorted();
    }
    recorder.record(Marks::none());
    (recorder, trivial)
}

/// Bubble sort: adjacent exchanges, sorted region grows from the tail
pub fn bubble(values: &[i64]) -> Vec<ArraySnapshot> {
    let (mut rec, trivial) = begin(values);
    if trivial {
        return rec.finish();
    }

    let n = rec.len();
    for i in 0..n {
        for j in 0..n - 1 - i {
            rec.compare();
            rec.record(Marks::comparing(&[j, j + 1]));
            if rec.get(j) > rec.get(j + 1) {
                rec.swap(j, j + 1);
                rec.record(Marks::comparing(&[j, j + 1]).swapped());
            }
        }
        rec.mark_sorted(n - 1 - i..n);
        rec.record(Marks::none());
    }

    rec.finish_sorted()
}

/// Selection sort: sorted region grows from the head
pub fn selection(values: &[i64]) -> Vec<ArraySnapshot> {
    let (mut rec, trivial) = begin(values);
    if trivial {
        return rec.finish();
    }

    let n = rec.len();
    for i in 0..n - 1 {
        let mut min_idx = i;
        rec.record(Marks::comparing(&[i]));

        for j in i + 1..n {
            rec.compare();
            rec.record(Marks::comparing(&[min_idx, j]).with_active(&[j]));
            if rec.get(j) < rec.get(min_idx) {
                min_idx = j;
            }
        }

        if min_idx != i {
            rec.swap(i, min_idx);
            rec.record(Marks::comparing(&[i, min_idx]).swapped());
        }
        rec.mark_sorted([i]);
        rec.record(Marks::none());
    }

    rec.finish_sorted()
}

/// Insertion sort: the key walks left one exchange at a time
pub fn insertion(values: &[i64]) -> Vec<ArraySnapshot> {
    let (mut rec, trivial) = begin(values);
    if trivial {
        return rec.finish();
    }

    let n = rec.len();
    for i in 1..n {
        rec.record(Marks::comparing(&[i]));

        // The key always sits at `j + 1`, so each shift is an adjacent exchange
        let mut j = i;
        while j > 0 {
            rec.compare();
            if rec.get(j - 1) <= rec.get(j) {
                break;
            }
            rec.record(Marks::comparing(&[j - 1, j]));
            rec.swap(j - 1, j);
            j -= 1;
            rec.record(Marks::comparing(&[j]).swapped());
        }

        rec.mark_sorted(0..=i);
        rec.record(Marks::none());
    }

    rec.finish_sorted()
}

/// Quicksort with Lomuto partitioning, traced in pre-order
pub fn quick(values: &[i64]) -> Vec<ArraySnapshot> {
    let (mut rec, trivial) = begin(values);
    if trivial {
        return rec.finish();
    }

    let high = rec.len() - 1;
    quick_range(&mut rec, 0, high);
    rec.finish_sorted()
}

fn quick_range(rec: &mut TraceRecorder, low: usize, high: usize) {
    if low >= high {
        return;
    }

    let p = partition(rec, low, high);
    if p > low {
        quick_range(rec, low, p - 1);
    }
    quick_range(rec, p + 1, high);
}

/// Partition `low..=high` around `array[high]`, returning the pivot's final index
fn partition(rec: &mut TraceRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.get(high);
    let mut boundary = low;

    for j in low..high {
        rec.compare();
        rec.record(Marks::comparing(&[j, high]).with_pivot(high));
        if rec.get(j) < pivot {
            rec.swap(boundary, j);
            rec.record(Marks::comparing(&[boundary, j]).with_pivot(high).swapped());
            boundary += 1;
        }
    }

    rec.swap(boundary, high);
    rec.mark_sorted([boundary]);
    rec.record(
        Marks::comparing(&[boundary, high])
            .with_pivot(boundary)
            .swapped(),
    );
    boundary
}

/// Top-down merge sort over one shared working array
pub fn merge(values: &[i64]) -> Vec<ArraySnapshot> {
    let (mut rec, trivial) = begin(values);
    if trivial {
        return rec.finish();
    }

    let end = rec.len() - 1;
    merge_range(&mut rec, 0, end);
    rec.finish_sorted()
}

fn merge_range(rec: &mut TraceRecorder, start: usize, end: usize) {
    if start >= end {
        return;
    }

    let mid = start + (end - start) / 2;
    rec.record(Marks::none().with_dividing(start, mid, end));

    merge_range(rec, start, mid);
    merge_range(rec, mid + 1, end);
    merge_halves(rec, start, mid, end);
}

/// Merge the sorted runs `start..=mid` and `mid+1..=end` in place.
///
/// `k` is the next output slot and the head of the remaining left run; `r` is
/// the head of the remaining right run. Taking from the right rotates that
/// element down into `k`, so the array stays a permutation throughout.
fn merge_halves(rec: &mut TraceRecorder, start: usize, mid: usize, end: usize) {
    rec.record(Marks::none().with_merging(start, end));

    let mut k = start;
    let mut r = mid + 1;

    while k < r && r <= end {
        rec.compare();
        rec.record(
            Marks::comparing(&[k, r])
                .with_active(&[k])
                .with_merging(start, end),
        );

        if rec.get(k) <= rec.get(r) {
            rec.write_in_place();
        } else {
            rec.rotate_into(k, r);
            r += 1;
        }
        rec.record(
            Marks::none()
                .with_active(&[k])
                .with_merging(start, end)
                .swapped(),
        );
        k += 1;
    }

    // Whichever run remains is already in its final slots
    while k <= end {
        rec.write_in_place();
        rec.record(
            Marks::none()
                .with_active(&[k])
                .with_merging(start, end)
                .swapped(),
        );
        k += 1;
    }

    rec.mark_sorted(start..=end);
    rec.record(Marks::none());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last(snapshots: &[ArraySnapshot]) -> &ArraySnapshot {
        snapshots.last().expect("trace is never empty")
    }

    #[test]
    fn test_bubble_counts() {
        let snapshots = bubble(&[3, 2, 1]);
        let end = last(&snapshots);
        assert_eq!(end.array, vec![1, 2, 3]);
        assert_eq!(end.comparisons, 3);
        assert_eq!(end.swaps, 3);
        assert!(end.is_fully_sorted());
    }

    #[test]
    fn test_bubble_marks_tail_first() {
        let snapshots = bubble(&[2, 1, 3]);
        let first_mark = snapshots
            .iter()
            .find(|s| !s.sorted.is_empty())
            .expect("a pass end is recorded");
        assert_eq!(first_mark.sorted.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_selection_counts_every_candidate() {
        let snapshots = selection(&[4, 3, 2, 1]);
        let end = last(&snapshots);
        assert_eq!(end.array, vec![1, 2, 3, 4]);
        // 3 + 2 + 1 candidates
        assert_eq!(end.comparisons, 6);
        assert_eq!(end.swaps, 2);
    }

    #[test]
    fn test_insertion_counts_failed_comparison() {
        let snapshots = insertion(&[1, 3, 2]);
        let end = last(&snapshots);
        assert_eq!(end.array, vec![1, 2, 3]);
        // i=1: 1<=3 stops; i=2: 3>2 shifts, then 1<=2 stops
        assert_eq!(end.comparisons, 3);
        assert_eq!(end.swaps, 1);
    }

    #[test]
    fn test_quick_preorder_partition() {
        let snapshots = quick(&[3, 1, 2]);
        // Pivot 2 at index 2 is compared first against index 0
        assert_eq!(snapshots[1].comparing, vec![0, 2]);
        assert_eq!(snapshots[1].pivot, Some(2));
        assert_eq!(last(&snapshots).array, vec![1, 2, 3]);
    }

    #[test]
    fn test_quick_pivot_marked_sorted() {
        let snapshots = quick(&[5, 4, 1, 3]);
        let placement = snapshots
            .iter()
            .find(|s| s.swapped && s.pivot.is_some() && !s.sorted.is_empty())
            .expect("pivot placement recorded");
        let p = placement.pivot.expect("pivot set");
        assert!(placement.sorted.contains(&p));
        assert_eq!(placement.array[p], 3);
    }

    #[test]
    fn test_merge_divides_before_merging() {
        let snapshots = merge(&[4, 3, 2, 1]);
        assert_eq!(snapshots[1].dividing, Some((0, 1, 3)));
        let first_merge = snapshots
            .iter()
            .position(|s| s.merging.is_some())
            .expect("merge recorded");
        let second_divide = snapshots
            .iter()
            .skip(2)
            .position(|s| s.dividing.is_some())
            .map(|p| p + 2)
            .expect("nested divide recorded");
        assert!(second_divide < first_merge);
        let end = last(&snapshots);
        assert_eq!(end.array, vec![1, 2, 3, 4]);
        // Every element is written once per merge level
        assert_eq!(end.swaps, 8);
    }

    #[test]
    fn test_merge_is_stable_on_ties() {
        let snapshots = merge(&[2, 2]);
        let compare = snapshots
            .iter()
            .find(|s| s.comparing.len() == 2)
            .expect("comparison recorded");
        assert_eq!(compare.comparing, vec![0, 1]);
        assert_eq!(last(&snapshots).comparisons, 1);
    }

    #[test]
    fn test_trivial_inputs() {
        for tracer in [bubble, selection, insertion, quick, merge] {
            for input in [&[][..], &[7][..]] {
                let snapshots = tracer(input);
                assert_eq!(snapshots.len(), 1);
                assert!(snapshots[0].is_fully_sorted());
                assert_eq!(snapshots[0].comparisons, 0);
                assert_eq!(snapshots[0].swaps, 0);
            }
        }
    }
}
