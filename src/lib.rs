//! # Introduction
//!
//! algotty runs a sorting, searching or tree-building algorithm over a small
//! integer dataset, records a snapshot of the algorithm's state at every
//! comparison, swap, partition, merge or insertion, and plays the recorded
//! trace back one step at a time in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Tracer → Trace (snapshots) → Playback → TUI
//! ```
//!
//! 1. [`dataset`]: the ordered integer sequence being visualized.
//! 2. [`tracer`]: the algorithm catalog; each tracer produces a complete
//!    [`snapshot::Trace`] synchronously before playback starts.
//! 3. [`snapshot`]: immutable array and tree snapshots plus the recorder the
//!    array tracers share.
//! 4. [`playback`]: a cursor over a trace with pause/resume/reset and a
//!    caller-driven tick cadence.
//! 5. [`session`]: ties dataset, algorithm, search target and playback
//!    together; any edit discards the current trace.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorts: bubble, selection, insertion, quick (Lomuto), merge.
//! Searches: linear, binary (over a sorted copy).
//! Tree: binary search tree insertion.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod playback;
pub mod session;
pub mod snapshot;
pub mod tracer;
pub mod ui;
