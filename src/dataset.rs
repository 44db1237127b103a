//! The integer dataset algorithms run against

use crate::errors::TraceError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Dataset shown when no other input is given
pub const DEFAULT_DATASET: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Ordered values; duplicates allowed, insertion order significant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    pub fn new(values: Vec<i64>) -> Self {
        Dataset { values }
    }

    /// `count` values drawn uniformly from `0..max`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize, max: i64) -> Self {
        let upper = max.max(1);
        Dataset {
            values: (0..count).map(|_| rng.gen_range(0..upper)).collect(),
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn add(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Remove and return the value at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<i64, TraceError> {
        if index >= self.values.len() {
            return Err(TraceError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    /// Replace the contents with a fresh random sequence
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, max: i64) {
        *self = Self::random(rng, count, max);
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl FromStr for Dataset {
    type Err = TraceError;

    /// Parse comma- or whitespace-separated integers; empty text is an empty dataset
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|e| TraceError::invalid_input(part, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset { values })
    }
}
