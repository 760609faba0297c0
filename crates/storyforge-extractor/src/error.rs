//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// The public chapter and proposal entry points never return these for bad
/// input; they surface as diagnostics from the `try_` variants and from
/// configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// No `{ ... }` span anywhere in the text
    #[error("No JSON object found in response")]
    NoJsonObject,

    /// The candidate span is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The candidate parsed, but not as an object
    #[error("Expected a JSON object")]
    NotAnObject,

    /// Required keys absent, non-string, or blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A label alias produced an invalid pattern
    #[error("Invalid label pattern: {0}")]
    Pattern(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_keys() {
        let err = ExtractorError::MissingRequiredFields(vec!["theme", "synopsis"]);
        assert_eq!(err.to_string(), "Missing required fields: theme, synopsis");
    }

    #[test]
    fn test_from_serde_json() {
        let err: ExtractorError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ExtractorError::JsonParse(_)));
    }
}
