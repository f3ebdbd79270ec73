use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateListError {
    message: String,
}

impl CandidateListError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CandidateListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for CandidateListError {}

/// Pull a candidate list out of a parsed JSON document. Anything other
/// than a flat sequence of strings is rejected.
pub fn candidates_from_value(
    value: &serde_json::Value,
) -> Result<Vec<String>, CandidateListError> {
    let serde_json::Value::Array(items) = value else {
        return Err(CandidateListError::new(
            "candidate list must be a sequence",
        ));
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let serde_json::Value::String(text) = item else {
            return Err(CandidateListError::new(format!(
                "candidate at index {idx} is not a string"
            )));
        };
        out.push(text.clone());
    }
    Ok(out)
}

pub fn candidates_from_json(input: &str) -> Result<Vec<String>, CandidateListError> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|err| CandidateListError::new(format!("invalid JSON: {err}")))?;
    candidates_from_value(&value)
}

pub fn candidates_from_yaml(input: &str) -> Result<Vec<String>, CandidateListError> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)
        .map_err(|err| CandidateListError::new(format!("invalid YAML: {err}")))?;

    let serde_yaml::Value::Sequence(items) = value else {
        return Err(CandidateListError::new(
            "candidate list must be a sequence",
        ));
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let Some(text) = item.as_str() else {
            return Err(CandidateListError::new(format!(
                "candidate at index {idx} is not a string"
            )));
        };
        out.push(text.to_string());
    }
    Ok(out)
}
