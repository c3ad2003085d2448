//! Validated minimum run length

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, MatchResult};

/// Minimum number of consecutive equal characters that counts as a match.
///
/// Always at least 1. Zero and negative values are rejected at construction
/// rather than clamped, so a threshold can never degrade into "every shared
/// character matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    /// Default used by [`crate::MatcherConfig`]
    pub const DEFAULT: Threshold = Threshold(NonZeroUsize::MIN.saturating_add(2));

    /// Create a threshold, rejecting zero
    pub fn new(value: usize) -> MatchResult<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(MatchError::InvalidThreshold(0))
    }

    /// The threshold as a plain length
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Threshold {
    type Error = MatchError;

    fn try_from(value: i64) -> MatchResult<Self> {
        let as_len = usize::try_from(value).map_err(|_| MatchError::InvalidThreshold(value))?;
        NonZeroUsize::new(as_len)
            .map(Self)
            .ok_or(MatchError::InvalidThreshold(value))
    }
}

impl From<Threshold> for usize {
    fn from(threshold: Threshold) -> Self {
        threshold.get()
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert_eq!(Threshold::new(4).unwrap().get(), 4);
        assert_eq!(Threshold::try_from(1i64).unwrap().get(), 1);
    }

    #[test]
    fn default_is_three() {
        assert_eq!(Threshold::DEFAULT.get(), 3);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(Threshold::new(0), Err(MatchError::InvalidThreshold(0)));
        assert_eq!(Threshold::try_from(0i64), Err(MatchError::InvalidThreshold(0)));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            Threshold::try_from(-3i64),
            Err(MatchError::InvalidThreshold(-3))
        );
    }

    #[test]
    fn serde_validates() {
        let t: Threshold = serde_json::from_str("5").unwrap();
        assert_eq!(t.get(), 5);
        assert_eq!(serde_json::to_string(&t).unwrap(), "5");

        let err = serde_json::from_str::<Threshold>("-1").unwrap_err();
        assert!(err.to_string().contains("invalid threshold -1"));
    }
}
