//! Run matcher - first qualifying run of shared characters

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::error::MatchResult;
use crate::fold;
use crate::threshold::Threshold;

/// A run of characters shared by term and needle.
///
/// Indices are character offsets, not byte offsets. `found` is taken from
/// the caller's term, so it keeps the original casing even when matching
/// was case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartMatch {
    /// The matched run, sliced from the term
    pub found: String,
    /// Start of the run in the term
    pub term_index: usize,
    /// Start of the run in the needle
    pub needle_index: usize,
}

impl PartMatch {
    /// Run length in characters
    pub fn len(&self) -> usize {
        self.found.chars().count()
    }

    /// Always false for runs returned by [`find_part`]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Borrowed input for [`find_part`] and [`contains_part`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRequest<'a> {
    /// The base string searched against
    pub term: &'a str,
    /// The string whose characters seed the search
    pub needle: &'a str,
    /// Minimum run length that counts as a match
    pub threshold: Threshold,
    /// Fold both strings before comparing
    pub case_insensitive: bool,
}

impl<'a> MatchRequest<'a> {
    /// Case-sensitive request; fails if `threshold` is zero
    pub fn new(term: &'a str, needle: &'a str, threshold: usize) -> MatchResult<Self> {
        Ok(Self::with_threshold(term, needle, Threshold::new(threshold)?))
    }

    /// Case-sensitive request from an already validated threshold
    pub fn with_threshold(term: &'a str, needle: &'a str, threshold: Threshold) -> Self {
        Self {
            term,
            needle,
            threshold,
            case_insensitive: false,
        }
    }

    /// Set whether matching ignores case
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}

/// Find the first run of at least `threshold` consecutive characters shared
/// by term and needle.
///
/// Scan order is part of the contract: needle positions ascending, then
/// occurrences of that needle character in the term ascending. The first run
/// that reaches the threshold wins, even if a longer run exists later. The
/// returned run is extended until the first mismatch, so it may be longer
/// than the threshold.
///
/// Returns `None` when no run qualifies, including for empty inputs.
pub fn find_part(request: &MatchRequest<'_>) -> Option<PartMatch> {
    let threshold = request.threshold.get();
    let term = WorkingTerm::new(request.term, request.case_insensitive);
    let needle = fold::working_chars(request.needle, request.case_insensitive);

    if term.chars.len() < threshold {
        return None;
    }

    for (needle_index, &seed) in needle.iter().enumerate() {
        let rest = &needle[needle_index..];
        // Later seeds only get shorter
        if rest.len() < threshold {
            break;
        }

        for term_index in term.occurrences(seed) {
            let len = run_length(&term.chars[term_index..], rest);
            if len >= threshold {
                debug!(term_index, needle_index, len, "run accepted");
                return Some(PartMatch {
                    found: request.term.chars().skip(term_index).take(len).collect(),
                    term_index,
                    needle_index,
                });
            }
            trace!(term_index, needle_index, len, "run below threshold");
        }
    }

    None
}

/// Whether [`find_part`] finds a qualifying run
pub fn contains_part(request: &MatchRequest<'_>) -> bool {
    find_part(request).is_some()
}

/// Count leading positions where both slices agree
#[inline]
fn run_length(term: &[char], needle: &[char]) -> usize {
    term.iter()
        .zip(needle)
        .take_while(|(t, n)| t == n)
        .count()
}

/// Folded copy of the term with an optional byte view for SIMD search
struct WorkingTerm {
    chars: Vec<char>,
    #[cfg(feature = "simd")]
    ascii: Option<Vec<u8>>,
}

impl WorkingTerm {
    fn new(term: &str, case_insensitive: bool) -> Self {
        let chars = fold::working_chars(term, case_insensitive);
        #[cfg(feature = "simd")]
        let ascii = chars
            .iter()
            .all(char::is_ascii)
            .then(|| chars.iter().map(|&c| c as u8).collect());

        Self {
            chars,
            #[cfg(feature = "simd")]
            ascii,
        }
    }

    /// Positions of `seed` in ascending order
    fn occurrences(&self, seed: char) -> Occurrences<'_> {
        #[cfg(feature = "simd")]
        if let Some(bytes) = &self.ascii {
            if !seed.is_ascii() {
                return Occurrences::Exhausted;
            }
            return Occurrences::Bytes(memchr::memchr_iter(seed as u8, bytes));
        }

        Occurrences::scalar(&self.chars, seed)
    }
}

/// Ascending positions of one character in the working term
enum Occurrences<'a> {
    Scalar {
        chars: std::iter::Enumerate<std::slice::Iter<'a, char>>,
        seed: char,
    },
    #[cfg(feature = "simd")]
    Bytes(memchr::Memchr<'a>),
    #[cfg(feature = "simd")]
    Exhausted,
}

impl<'a> Occurrences<'a> {
    fn scalar(chars: &'a [char], seed: char) -> Self {
        Self::Scalar {
            chars: chars.iter().enumerate(),
            seed,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Scalar { chars, seed } => {
                let seed = *seed;
                chars.find(|&(_, &c)| c == seed).map(|(idx, _)| idx)
            }
            #[cfg(feature = "simd")]
            Self::Bytes(found) => found.next(),
            #[cfg(feature = "simd")]
            Self::Exhausted => None,
        }
    }
}

/// Reusable matcher holding a validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatcher {
    threshold: Threshold,
    case_insensitive: bool,
}

impl Default for RunMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMatcher {
    /// Create a matcher with the default configuration
    pub fn new() -> Self {
        let config = MatcherConfig::default();
        Self {
            threshold: config.validate().unwrap_or(Threshold::DEFAULT),
            case_insensitive: config.case_insensitive,
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: MatcherConfig) -> MatchResult<Self> {
        Ok(Self {
            threshold: config.validate()?,
            case_insensitive: config.case_insensitive,
        })
    }

    /// Minimum run length in use
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Whether both strings are folded before comparing
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    fn request<'a>(&self, term: &'a str, needle: &'a str) -> MatchRequest<'a> {
        MatchRequest::with_threshold(term, needle, self.threshold)
            .case_insensitive(self.case_insensitive)
    }

    /// See [`find_part`]
    pub fn find(&self, term: &str, needle: &str) -> Option<PartMatch> {
        find_part(&self.request(term, needle))
    }

    /// See [`contains_part`]
    pub fn contains(&self, term: &str, needle: &str) -> bool {
        contains_part(&self.request(term, needle))
    }
}
