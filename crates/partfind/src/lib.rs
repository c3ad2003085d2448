//! Partfind
//!
//! Locates the first run of consecutive characters that two strings share at
//! any alignment, as long as the run reaches a minimum length. Typical use is
//! password policy: reject a password (the needle) that contains a fragment
//! of the account name (the term).
//!
//! Matching is first-match, not best-match. The needle is scanned left to
//! right; for each needle character every occurrence in the term is tried in
//! ascending order, and the first run reaching the threshold is returned.
//!
//! # Features
//!
//! - `simd` - memchr-accelerated occurrence search when both strings are ASCII
//!
//! # Example
//!
//! ```rust
//! use partfind::{find_part, MatchRequest};
//!
//! let request = MatchRequest::new("dfeprado@gmail.com", "Pass!2988prad", 4)
//!     .unwrap()
//!     .case_insensitive(true);
//!
//! let found = find_part(&request).unwrap();
//! assert_eq!(found.found, "prad");
//! assert_eq!(found.term_index, 3);
//! assert_eq!(found.needle_index, 9);
//! ```

pub mod config;
pub mod error;
pub mod fold;
pub mod json;
pub mod matcher;
pub mod threshold;

// Re-export main types at crate root
pub use config::MatcherConfig;
pub use error::{MatchError, MatchResult};
pub use json::{contains_part_json, find_part_json, JsonMatchInput};
pub use matcher::{contains_part, find_part, MatchRequest, PartMatch, RunMatcher};
pub use threshold::Threshold;
