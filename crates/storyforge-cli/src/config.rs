//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use storyforge_extractor::{Extractor, ExtractorConfig};
use storyforge_validator::{ProposalValidator, ValidationConfig};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Chapter extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Proposal length limits
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".storyforge").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the extractor and validation sections.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.validation
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Build an extractor from the configured sections.
    pub fn build_extractor(&self) -> Result<Extractor> {
        let validator = ProposalValidator::new(self.validation.clone());
        Ok(Extractor::new(self.extractor.clone())?.with_validator(validator))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.validation.title_max_chars, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"

            [validation]
            title_max_chars = 40
            "#,
        )
        .unwrap();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.validation.title_max_chars, 40);
        assert_eq!(config.validation.synopsis_max_chars, 2000);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let mut config = Config::default();
        config.validation.synopsis_max_chars = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_build_extractor_uses_limits() {
        let mut config = Config::default();
        config.validation.title_max_chars = 2;
        let extractor = config.build_extractor().unwrap();
        let proposal = extractor
            .extract_story_proposal(
                r#"{"title":"abc","theme":"t","mainGenre":"g","description":"d","synopsis":"s"}"#,
            )
            .unwrap();
        assert!(!extractor.validate_story_proposal(&proposal).valid);
    }
}
