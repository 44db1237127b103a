//! Error types for trace generation and dataset editing
//!
//! An empty dataset is deliberately absent here: it produces a trivial
//! baseline-only trace rather than an error.

use thiserror::Error;

/// Errors surfaced before any snapshot is generated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Search target or dataset text that is not a well-formed integer
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Algorithm identifier outside the fixed catalog
    #[error("Unknown algorithm '{0}' (expected bubble, selection, insertion, quick, merge, linear, binary or bst)")]
    UnknownAlgorithm(String),

    /// Dataset removal past the end
    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TraceError {
    /// Creates an invalid input error.
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
