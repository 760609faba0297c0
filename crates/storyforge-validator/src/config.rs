//! Validator configuration

use crate::ValidatorError;
use serde::{Deserialize, Serialize};

/// Length ceilings for proposal fields, in characters
///
/// These are UI guidance limits. Exceeding one produces a violation; the
/// data itself is never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum title length
    pub title_max_chars: usize,

    /// Maximum description length
    pub description_max_chars: usize,

    /// Maximum synopsis length
    pub synopsis_max_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            title_max_chars: 100,
            description_max_chars: 500,
            synopsis_max_chars: 2000,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidatorError> {
        let limits = [
            ("title_max_chars", self.title_max_chars),
            ("description_max_chars", self.description_max_chars),
            ("synopsis_max_chars", self.synopsis_max_chars),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ValidatorError::Config(format!("{} must be greater than 0", name)));
            }
        }
        Ok(())
    }
}
