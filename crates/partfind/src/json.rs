//! JSON entry points for callers outside Rust.
//!
//! Field names are camelCase for JavaScript callers
//! (`term`, `needle`, `threshold`, `caseInsensitive`). The legacy
//! `thresold` spelling is accepted as an alias. Failures come back as
//! `{"error": "..."}` instead of panicking across the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, MatchResult};
use crate::matcher::{contains_part, find_part, MatchRequest, PartMatch};
use crate::threshold::Threshold;

/// Input for the JSON find/contains functions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMatchInput {
    pub term: String,
    pub needle: String,
    #[serde(alias = "thresold")]
    pub threshold: i64,
    #[serde(default)]
    pub case_insensitive: bool,
}

impl JsonMatchInput {
    pub fn parse(input: &str) -> MatchResult<Self> {
        serde_json::from_str(input).map_err(|e| MatchError::InvalidInput(e.to_string()))
    }

    /// Borrow as a request, validating the threshold
    pub fn request(&self) -> MatchResult<MatchRequest<'_>> {
        let threshold = Threshold::try_from(self.threshold)?;
        Ok(MatchRequest::with_threshold(&self.term, &self.needle, threshold)
            .case_insensitive(self.case_insensitive))
    }
}

/// Output of the JSON find function
#[derive(Debug, Serialize)]
pub struct FindOutput {
    pub result: Option<PartMatch>,
}

/// Output of the JSON contains function
#[derive(Debug, Serialize)]
pub struct ContainsOutput {
    pub contains: bool,
}

fn error_json(err: &MatchError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

fn to_json<T: Serialize>(output: &T) -> String {
    match serde_json::to_string(output) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
    }
}

/// JSON entry point: decode options, run [`find_part`], serialize the result.
pub fn find_part_json(input: &str) -> String {
    let parsed = match JsonMatchInput::parse(input) {
        Ok(v) => v,
        Err(e) => return error_json(&e),
    };

    match parsed.request() {
        Ok(request) => to_json(&FindOutput {
            result: find_part(&request),
        }),
        Err(e) => error_json(&e),
    }
}

/// JSON entry point: decode options, run [`contains_part`].
pub fn contains_part_json(input: &str) -> String {
    let parsed = match JsonMatchInput::parse(input) {
        Ok(v) => v,
        Err(e) => return error_json(&e),
    };

    match parsed.request() {
        Ok(request) => to_json(&ContainsOutput {
            contains: contains_part(&request),
        }),
        Err(e) => error_json(&e),
    }
}
