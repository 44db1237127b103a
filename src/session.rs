//! A visualizer session: dataset, selected algorithm, target and playback
//!
//! Every mutation of the inputs discards the current trace. A trace is never
//! patched in place; `run` always regenerates it from scratch.

use crate::config::{Config, RANDOM_COUNT, RANDOM_MAX};
use crate::dataset::Dataset;
use crate::errors::TraceError;
use crate::playback::Playback;
use crate::tracer::Algorithm;
use rand::Rng;
use std::time::Instant;
use tracing::debug;

#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    algorithm: Algorithm,
    target: String,
    playback: Playback,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            dataset: config.dataset,
            algorithm: config.algorithm,
            target: config.target.unwrap_or_default(),
            playback: Playback::new(config.speed_ms),
        }
    }

    /// Generate a fresh trace for the current inputs and start playing it.
    ///
    /// On failure the previous trace is still discarded and nothing plays.
    pub fn run(&mut self, now: Instant) -> Result<usize, TraceError> {
        self.playback.reset();
        let target = (!self.target.trim().is_empty()).then_some(self.target.as_str());
        let trace = self.algorithm.trace(self.dataset.values(), target)?;
        let len = trace.len();
        self.playback.load(trace, now);
        Ok(len)
    }

    /// Stop playback and drop the trace
    pub fn reset(&mut self) {
        self.playback.reset();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm != self.algorithm {
            debug!(from = %self.algorithm, to = %algorithm, "algorithm changed");
        }
        self.algorithm = algorithm;
        self.playback.reset();
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.playback.reset();
    }

    pub fn add(&mut self, value: i64) {
        self.dataset.add(value);
        debug!(value, len = self.dataset.len(), "value added");
        self.playback.reset();
    }

    pub fn remove_at(&mut self, index: usize) -> Result<i64, TraceError> {
        let removed = self.dataset.remove_at(index)?;
        debug!(index, removed, len = self.dataset.len(), "value removed");
        self.playback.reset();
        Ok(removed)
    }

    /// Replace the dataset with the default-sized random sequence
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize_with(rng, RANDOM_COUNT, RANDOM_MAX);
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, max: i64) {
        self.dataset.randomize(rng, count, max);
        debug!(dataset = %self.dataset, "dataset randomized");
        self.playback.reset();
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_edits_invalidate_trace() {
        let now = Instant::now();
        let mut session = Session::new(Config::default());

        session.run(now).expect("bubble needs no target");
        session.add(5);
        assert!(!session.playback().has_trace());

        session.run(now).expect("rerun");
        session.remove_at(0).expect("index 0 exists");
        assert!(!session.playback().has_trace());

        session.run(now).expect("rerun");
        session.randomize(&mut StdRng::seed_from_u64(1));
        assert!(!session.playback().has_trace());
        assert_eq!(session.dataset().len(), RANDOM_COUNT);

        session.run(now).expect("rerun");
        session.set_algorithm(Algorithm::Merge);
        assert!(!session.playback().has_trace());
    }

    #[test]
    fn test_search_without_target_fails_cleanly() {
        let now = Instant::now();
        let mut session = Session::new(Config::default());
        session.run(now).expect("bubble runs");

        session.set_algorithm(Algorithm::Binary);
        assert!(matches!(
            session.run(now),
            Err(TraceError::InvalidInput { .. })
        ));
        assert!(!session.playback().has_trace());
        assert!(!session.playback().is_running());

        session.set_target("25");
        assert!(session.run(now).is_ok());
    }
}
