// Append-only snapshot recording shared by the array tracers

use super::ArraySnapshot;
use std::collections::BTreeSet;

/// Highlights attached to a single recorded snapshot
#[derive(Debug, Clone, Default)]
pub struct Marks {
    pub comparing: Vec<usize>,
    pub active: Vec<usize>,
    pub merging: Option<(usize, usize)>,
    pub dividing: Option<(usize, usize, usize)>,
    pub pivot: Option<usize>,
    pub range: Option<(usize, usize)>,
    pub swapped: bool,
    pub found: Option<usize>,
}

impl Marks {
    /// No highlights at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Compare the given indices; they are also the active ones
    pub fn comparing(indices: &[usize]) -> Self {
        Marks {
            comparing: indices.to_vec(),
            active: indices.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_active(mut self, indices: &[usize]) -> Self {
        self.active = indices.to_vec();
        self
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_merging(mut self, lo: usize, hi: usize) -> Self {
        self.merging = Some((lo, hi));
        self
    }

    pub fn with_dividing(mut self, start: usize, mid: usize, end: usize) -> Self {
        self.dividing = Some((start, mid, end));
        self
    }

    pub fn with_range(mut self, lo: usize, hi: usize) -> Self {
        self.range = Some((lo, hi));
        self
    }

    pub fn with_found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    pub fn swapped(mut self) -> Self {
        self.swapped = true;
        self
    }
}

/// Owns the working array and counters of one in-progress trace generation.
///
/// Recursive tracers receive `&mut TraceRecorder` explicitly; the working array
/// only leaves the recorder as a copy inside a snapshot.
#[derive(Debug)]
pub struct TraceRecorder {
    array: Vec<i64>,
    comparisons: usize,
    swaps: usize,
    sorted: BTreeSet<usize>,
    snapshots: Vec<ArraySnapshot>,
}

impl TraceRecorder {
    pub fn new(values: &[i64]) -> Self {
        TraceRecorder {
            array: values.to_vec(),
            comparisons: 0,
            swaps: 0,
            sorted: BTreeSet::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn get(&self, index: usize) -> i64 {
        self.array[index]
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Count one comparison
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    /// Exchange two elements, counted as one swap
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
    }

    /// Move the element at `from` down to `to`, shifting `to..from` right by one.
    /// Counted as a single write.
    pub fn rotate_into(&mut self, to: usize, from: usize) {
        self.array[to..=from].rotate_right(1);
        self.swaps += 1;
    }

    /// Count a write that leaves the element where it already is
    pub fn write_in_place(&mut self) {
        self.swaps += 1;
    }

    pub fn mark_sorted<I: IntoIterator<Item = usize>>(&mut self, indices: I) {
        self.sorted.extend(indices);
    }

    pub fn mark_all_sorted(&mut self) {
        let len = self.array.len();
        self.sorted.extend(0..len);
    }

    /// Append a snapshot of the current state with the given highlights
    pub fn record(&mut self, marks: Marks) {
        self.snapshots.push(ArraySnapshot {
            array: self.array.clone(),
            comparing: marks.comparing,
            active: marks.active,
            sorted: self.sorted.clone(),
            merging: marks.merging,
            dividing: marks.dividing,
            pivot: marks.pivot,
            range: marks.range,
            swapped: marks.swapped,
            found: marks.found,
            comparisons: self.comparisons,
            swaps: self.swaps,
        });
    }

    /// Finish a sort trace, appending a closing fully-sorted snapshot if the
    /// last recorded one does not already cover every index.
    pub fn finish_sorted(mut self) -> Vec<ArraySnapshot> {
        let needs_closing = self
            .snapshots
            .last()
            .map_or(true, |last| !last.is_fully_sorted());
        if needs_closing {
            self.mark_all_sorted();
            self.record(Marks::none());
        }
        self.snapshots
    }

    /// Finish any trace as recorded
    pub fn finish(self) -> Vec<ArraySnapshot> {
        self.snapshots
    }
}
