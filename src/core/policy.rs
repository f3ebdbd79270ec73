use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a candidate is compared against the typed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    StartsWith,
    EndsWith,
    Contains,
}

impl MatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Contains => "contains",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = InvalidPolicyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "starts_with" => Ok(Self::StartsWith),
            "ends_with" => Ok(Self::EndsWith),
            "contains" => Ok(Self::Contains),
            other => Err(InvalidPolicyError::new(other)),
        }
    }
}

/// Rejected policy name. Raised while parsing configuration, never during a
/// search: a constructed `MatchPolicy` is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPolicyError {
    policy: String,
}

impl InvalidPolicyError {
    fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
        }
    }

    pub fn policy(&self) -> &str {
        self.policy.as_str()
    }
}

impl fmt::Display for InvalidPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized match policy '{}'", self.policy)
    }
}

impl std::error::Error for InvalidPolicyError {}
