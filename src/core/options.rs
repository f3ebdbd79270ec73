use crate::core::policy::MatchPolicy;
use serde::{Deserialize, Serialize};

/// Matcher configuration shared by `Predicate` and `GhostField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredicateOptions {
    pub policy: MatchPolicy,
    pub case_sensitive: bool,
}

/// Field-level tunables. Every field has a default so partial config
/// documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostOptions {
    /// Shown in the mask whenever there is no live suggestion.
    pub mask_default_value: String,
    pub case_sensitive: bool,
    /// Inputs shorter than this clear the mask instead of searching.
    pub min_length: usize,
    pub search_policy: MatchPolicy,
}

impl Default for GhostOptions {
    fn default() -> Self {
        Self {
            mask_default_value: String::new(),
            case_sensitive: false,
            min_length: 2,
            search_policy: MatchPolicy::StartsWith,
        }
    }
}

impl GhostOptions {
    pub fn predicate_options(&self) -> PredicateOptions {
        PredicateOptions {
            policy: self.search_policy,
            case_sensitive: self.case_sensitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GhostOptions, PredicateOptions};
    use crate::core::policy::MatchPolicy;

    #[test]
    fn empty_document_yields_defaults() {
        let options: GhostOptions = serde_json::from_str("{}").expect("options should parse");
        assert_eq!(options, GhostOptions::default());
        assert_eq!(options.min_length, 2);
        assert!(!options.case_sensitive);
        assert_eq!(options.search_policy, MatchPolicy::StartsWith);
        assert!(options.mask_default_value.is_empty());
    }

    #[test]
    fn full_document_overrides_every_field() {
        let options: GhostOptions = serde_json::from_str(
            r#"{
                "mask_default_value": "type to search",
                "case_sensitive": true,
                "min_length": 1,
                "search_policy": "contains"
            }"#,
        )
        .expect("options should parse");
        assert_eq!(options.mask_default_value, "type to search");
        assert!(options.case_sensitive);
        assert_eq!(options.min_length, 1);
        assert_eq!(options.search_policy, MatchPolicy::Contains);

        let predicate = options.predicate_options();
        assert_eq!(predicate.policy, MatchPolicy::Contains);
        assert!(predicate.case_sensitive);
    }

    #[test]
    fn unknown_policy_fails_at_parse_time() {
        let result = serde_json::from_str::<GhostOptions>(r#"{"search_policy": "regex"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn yaml_documents_parse_too() {
        let options: GhostOptions =
            serde_yaml::from_str("search_policy: ends_with\nmin_length: 3\n")
                .expect("yaml options should parse");
        assert_eq!(options.search_policy, MatchPolicy::EndsWith);
        assert_eq!(options.min_length, 3);

        let predicate: PredicateOptions =
            serde_yaml::from_str("policy: contains\n").expect("yaml predicate options");
        assert_eq!(predicate.policy, MatchPolicy::Contains);
        assert!(!predicate.case_sensitive);
    }
}
