//! Matcher configuration

use serde::{Deserialize, Serialize};

use crate::error::MatchResult;
use crate::threshold::Threshold;

/// Settings for [`crate::RunMatcher`].
///
/// Deserializes with defaults for missing fields, so `{}` is a valid config.
/// Field names are camelCase like the JSON entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Minimum run length; must be at least 1
    pub threshold: usize,
    /// Fold both strings before comparing
    #[serde(alias = "case_insensitive")]
    pub case_insensitive: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT.get(),
            case_insensitive: true,
        }
    }
}

impl MatcherConfig {
    /// Check the config and return the validated threshold
    pub fn validate(&self) -> MatchResult<Threshold> {
        Threshold::new(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn default_config() {
        let config = MatcherConfig::default();
        assert_eq!(config.threshold, 3);
        assert!(config.case_insensitive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_partial() {
        let config: MatcherConfig = serde_json::from_str(r#"{"threshold": 5}"#).unwrap();
        assert_eq!(config.threshold, 5);
        assert!(config.case_insensitive);

        let config: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MatcherConfig::default());
    }

    #[test]
    fn json_fields_are_camel_case() {
        let json = serde_json::to_value(MatcherConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({"threshold": 3, "caseInsensitive": true}));

        let config: MatcherConfig =
            serde_json::from_str(r#"{"caseInsensitive": false}"#).unwrap();
        assert!(!config.case_insensitive);

        let config: MatcherConfig =
            serde_json::from_str(r#"{"case_insensitive": false}"#).unwrap();
        assert!(!config.case_insensitive);
    }

    #[test]
    fn zero_threshold_invalid() {
        let config = MatcherConfig {
            threshold: 0,
            case_insensitive: false,
        };
        assert_eq!(config.validate(), Err(MatchError::InvalidThreshold(0)));
    }
}
