//! Matcher error types

use thiserror::Error;

/// Errors raised for malformed matcher input.
///
/// Not finding a run is never an error; see [`crate::find_part`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Threshold must be a positive integer
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(i64),

    /// Input could not be decoded
    #[error("invalid match input: {0}")]
    InvalidInput(String),
}

/// Result type for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;
