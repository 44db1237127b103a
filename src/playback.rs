//! Playback over a fully materialized trace
//!
//! [`Playback`] never computes anything; it only moves a cursor through a
//! [`Trace`] that was generated in full beforehand. Time is passed in by the
//! caller, so the event loop owns the clock and tests can use synthetic instants.
//!
//! At most one advance is ever pending (`next_advance`). Pausing, resetting or
//! loading a new trace drops it, so a stale deadline can never move the cursor
//! of a discarded trace.

use crate::config::clamp_speed;
use crate::snapshot::{ArraySnapshot, Metrics, Trace, TreeSnapshot};
use std::time::{Duration, Instant};

/// Result of a single tick or poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (paused, no trace, or not due yet)
    Idle,
    /// Moved to the given index
    Advanced(usize),
    /// Reached the last index; playback stopped
    Completed(usize),
}

#[derive(Debug)]
pub struct Playback {
    trace: Option<Trace>,
    current_index: usize,
    running: bool,
    speed: Duration,
    next_advance: Option<Instant>,
}

impl Playback {
    pub fn new(speed_ms: u64) -> Self {
        Playback {
            trace: None,
            current_index: 0,
            running: false,
            speed: Duration::from_millis(clamp_speed(speed_ms)),
            next_advance: None,
        }
    }

    /// Replace any current trace and start playing it from index 0
    pub fn load(&mut self, trace: Trace, now: Instant) {
        self.trace = Some(trace);
        self.current_index = 0;
        self.running = true;
        self.next_advance = Some(now + self.speed);
    }

    /// Drop the trace and return to `{index 0, not running}`
    pub fn reset(&mut self) {
        self.trace = None;
        self.current_index = 0;
        self.running = false;
        self.next_advance = None;
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.next_advance = None;
    }

    /// Resume playing; returns `false` when there is nothing left to play
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.trace.is_none() || self.is_at_end() {
            return false;
        }
        self.running = true;
        self.next_advance = Some(now + self.speed);
        true
    }

    /// Set the cadence, clamped to the allowed range; returns the effective value
    pub fn set_speed(&mut self, ms: u64) -> u64 {
        let ms = clamp_speed(ms);
        self.speed = Duration::from_millis(ms);
        ms
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed.as_millis() as u64
    }

    /// Advance exactly one step if running
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        let Some(len) = self.trace.as_ref().map(Trace::len) else {
            return TickOutcome::Idle;
        };

        if self.current_index + 1 < len {
            self.current_index += 1;
        }
        if self.current_index + 1 >= len {
            self.running = false;
            self.next_advance = None;
            return TickOutcome::Completed(self.current_index);
        }
        TickOutcome::Advanced(self.current_index)
    }

    /// Fire the pending advance if it is due at `now`, then schedule the next one
    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        match self.next_advance {
            Some(due) if self.running && now >= due => {
                let outcome = self.tick();
                if self.running {
                    self.next_advance = Some(now + self.speed);
                }
                outcome
            }
            _ => TickOutcome::Idle,
        }
    }

    /// Manual step forward; pauses playback
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        match &self.trace {
            Some(trace) if self.current_index + 1 < trace.len() => {
                self.current_index += 1;
                true
            }
            _ => false,
        }
    }

    /// Manual step backward; pauses playback
    pub fn step_backward(&mut self) -> bool {
        self.pause();
        if self.trace.is_some() && self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn jump_to_start(&mut self) {
        self.pause();
        self.current_index = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        if let Some(trace) = &self.trace {
            self.current_index = trace.len().saturating_sub(1);
        }
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn has_trace(&self) -> bool {
        self.trace.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_at_end(&self) -> bool {
        self.trace
            .as_ref()
            .is_some_and(|t| self.current_index + 1 >= t.len())
    }

    pub fn pending_advance(&self) -> Option<Instant> {
        self.next_advance
    }

    /// Counters read straight from the current snapshot
    pub fn metrics(&self) -> Metrics {
        self.trace
            .as_ref()
            .map(|t| t.metrics_at(self.current_index))
            .unwrap_or_default()
    }

    pub fn current_array(&self) -> Option<&ArraySnapshot> {
        self.trace
            .as_ref()
            .and_then(|t| t.array_snapshot(self.current_index))
    }

    pub fn current_tree(&self) -> Option<&TreeSnapshot> {
        self.trace
            .as_ref()
            .and_then(|t| t.tree_snapshot(self.current_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::sort;

    fn short_trace() -> Trace {
        // baseline, compare, swap, two pass ends
        Trace::Array(sort::bubble(&[2, 1]))
    }

    #[test]
    fn test_tick_walks_to_completion() {
        let mut playback = Playback::new(500);
        let trace = short_trace();
        let len = trace.len();
        playback.load(trace, Instant::now());

        let mut outcomes = Vec::new();
        loop {
            let outcome = playback.tick();
            outcomes.push(outcome);
            if matches!(outcome, TickOutcome::Completed(_)) {
                break;
            }
        }
        assert_eq!(outcomes.len(), len - 1);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Completed(len - 1)));
        assert!(!playback.is_running());
        assert_eq!(playback.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_poll_respects_deadline() {
        let start = Instant::now();
        let mut playback = Playback::new(200);
        playback.load(short_trace(), start);

        assert_eq!(playback.poll(start + Duration::from_millis(100)), TickOutcome::Idle);
        assert_eq!(
            playback.poll(start + Duration::from_millis(200)),
            TickOutcome::Advanced(1)
        );
        assert_eq!(
            playback.pending_advance(),
            Some(start + Duration::from_millis(400))
        );
    }

    #[test]
    fn test_reset_cancels_pending_advance() {
        let start = Instant::now();
        let mut playback = Playback::new(100);
        playback.load(short_trace(), start);
        playback.reset();

        assert_eq!(playback.pending_advance(), None);
        assert_eq!(playback.poll(start + Duration::from_secs(10)), TickOutcome::Idle);
        assert_eq!(playback.current_index(), 0);
        assert!(!playback.has_trace());
    }

    #[test]
    fn test_single_snapshot_completes_immediately() {
        let mut playback = Playback::new(100);
        playback.load(Trace::Array(sort::quick(&[])), Instant::now());
        assert_eq!(playback.tick(), TickOutcome::Completed(0));
    }

    #[test]
    fn test_manual_steps_pause() {
        let now = Instant::now();
        let mut playback = Playback::new(100);
        playback.load(short_trace(), now);

        assert!(playback.step_forward());
        assert!(!playback.is_running());
        assert!(playback.step_backward());
        assert!(!playback.step_backward());

        playback.jump_to_end();
        assert!(playback.is_at_end());
        assert!(!playback.resume(now));
        playback.jump_to_start();
        assert!(playback.resume(now));
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut playback = Playback::new(500);
        assert_eq!(playback.set_speed(20), 100);
        assert_eq!(playback.set_speed(5000), 2000);
        assert_eq!(playback.speed(), Duration::from_millis(2000));
    }
}
