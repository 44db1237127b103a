//! Startup configuration and tunable constants

use crate::dataset::{Dataset, DEFAULT_DATASET};
use crate::tracer::Algorithm;
use std::time::Duration;

/// Fastest allowed playback cadence
pub const MIN_SPEED_MS: u64 = 100;
/// Slowest allowed playback cadence
pub const MAX_SPEED_MS: u64 = 2000;
pub const DEFAULT_SPEED_MS: u64 = 500;
/// Increment used by the speed keys
pub const SPEED_STEP_MS: u64 = 100;

/// Size of a randomized dataset
pub const RANDOM_COUNT: usize = 10;
/// Exclusive upper bound of randomized values
pub const RANDOM_MAX: i64 = 100;

/// How long the completion banner stays up after playback ends
pub const COMPLETION_BANNER: Duration = Duration::from_secs(3);

/// Clamp a requested cadence into `MIN_SPEED_MS..=MAX_SPEED_MS`
pub fn clamp_speed(ms: u64) -> u64 {
    ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

/// Everything needed to start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub dataset: Dataset,
    pub target: Option<String>,
    pub speed_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::Bubble,
            dataset: Dataset::new(DEFAULT_DATASET.to_vec()),
            target: None,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(0), MIN_SPEED_MS);
        assert_eq!(clamp_speed(750), 750);
        assert_eq!(clamp_speed(10_000), MAX_SPEED_MS);
    }
}
