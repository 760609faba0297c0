//! Proposal validation logic

use crate::ValidationConfig;
use serde::Serialize;
use std::fmt;
use storyforge_domain::StoryProposal;
use tracing::debug;

/// Result of proposal validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the proposal passed every check
    pub valid: bool,

    /// Violations in check order
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Human-readable violation messages, in check order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

/// A single rule a proposal broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// Required field empty after trimming
    MissingField {
        /// JSON key of the field
        field: &'static str,
    },

    /// Field longer than its configured ceiling
    TooLong {
        /// JSON key of the field
        field: &'static str,
        /// Configured ceiling in characters
        max: usize,
        /// Actual trimmed length in characters
        actual: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingField { field } => write!(f, "{} is required", field),
            Violation::TooLong { field, max, actual } => write!(
                f,
                "{} must be at most {} characters (got {})",
                field, max, actual
            ),
        }
    }
}

/// Validates assembled proposals against the configured rules
#[derive(Debug, Clone, Default)]
pub struct ProposalValidator {
    config: ValidationConfig,
}

impl ProposalValidator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a proposal
    ///
    /// Presence checks run first, then length ceilings. All violations are
    /// collected; the proposal is never modified.
    pub fn validate(&self, proposal: &StoryProposal) -> ValidationResult {
        let mut violations = Vec::new();

        // 1. Required fields
        for (field, value) in proposal.required_fields() {
            if value.trim().is_empty() {
                violations.push(Violation::MissingField { field });
            }
        }

        // 2. Length ceilings
        let ceilings = [
            ("title", proposal.title.as_str(), self.config.title_max_chars),
            ("description", proposal.description.as_str(), self.config.description_max_chars),
            ("synopsis", proposal.synopsis.as_str(), self.config.synopsis_max_chars),
        ];
        for (field, value, max) in ceilings {
            let actual = value.trim().chars().count();
            if actual > max {
                violations.push(Violation::TooLong { field, max, actual });
            }
        }

        if !violations.is_empty() {
            debug!("Proposal '{}' has {} violation(s)", proposal.title.trim(), violations.len());
        }

        ValidationResult {
            valid: violations.is_empty(),
            violations,
        }
    }
}

/// Validate a proposal with the default limits
pub fn validate_story_proposal(proposal: &StoryProposal) -> ValidationResult {
    ProposalValidator::default_config().validate(proposal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_proposal() -> StoryProposal {
        StoryProposal {
            title: "星の海".to_string(),
            theme: "再生".to_string(),
            main_genre: "SF".to_string(),
            description: "漂流する少女の物語".to_string(),
            synopsis: "宇宙船の事故で一人になった少女が帰還を目指す。".to_string(),
            sub_genre: None,
            target_reader: None,
            image_analysis: None,
            audio_analysis: None,
            integrated_analysis: None,
            transcription: None,
        }
    }

    #[test]
    fn test_valid_proposal() {
        let result = validate_story_proposal(&create_test_proposal());
        assert!(result.valid);
        assert!(result.violations.is_empty());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_title_of_101_chars_reports_exactly_one_violation() {
        let mut proposal = create_test_proposal();
        proposal.title = "あ".repeat(101);

        let result = validate_story_proposal(&proposal);

        assert!(!result.valid);
        assert_eq!(
            result.violations,
            vec![Violation::TooLong { field: "title", max: 100, actual: 101 }]
        );
    }

    #[test]
    fn test_title_of_100_chars_is_valid() {
        let mut proposal = create_test_proposal();
        proposal.title = "x".repeat(100);
        assert!(validate_story_proposal(&proposal).valid);
    }

    #[test]
    fn test_length_counts_trimmed_characters() {
        let mut proposal = create_test_proposal();
        proposal.title = format!("  {}  ", "x".repeat(100));
        assert!(validate_story_proposal(&proposal).valid);
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut proposal = create_test_proposal();
        proposal.theme = " \n ".to_string();

        let result = validate_story_proposal(&proposal);

        assert_eq!(result.violations, vec![Violation::MissingField { field: "theme" }]);
        assert_eq!(result.messages(), vec!["theme is required".to_string()]);
    }

    #[test]
    fn test_multiple_violations_collected_in_order() {
        let mut proposal = create_test_proposal();
        proposal.main_genre = String::new();
        proposal.title = String::new();
        proposal.description = "d".repeat(501);
        proposal.synopsis = "s".repeat(2001);

        let result = validate_story_proposal(&proposal);

        assert!(!result.valid);
        assert_eq!(
            result.violations,
            vec![
                Violation::MissingField { field: "title" },
                Violation::MissingField { field: "mainGenre" },
                Violation::TooLong { field: "description", max: 500, actual: 501 },
                Violation::TooLong { field: "synopsis", max: 2000, actual: 2001 },
            ]
        );
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let mut proposal = create_test_proposal();
        proposal.synopsis = "s".repeat(3000);
        let before = proposal.clone();

        let _ = validate_story_proposal(&proposal);

        assert_eq!(proposal, before);
    }

    #[test]
    fn test_custom_limits() {
        let validator = ProposalValidator::new(ValidationConfig {
            title_max_chars: 3,
            ..ValidationConfig::default()
        });

        let result = validator.validate(&create_test_proposal());

        assert!(result.valid);

        let mut proposal = create_test_proposal();
        proposal.title = "四文字だ".to_string();
        let result = validator.validate(&proposal);
        assert_eq!(
            result.messages(),
            vec!["title must be at most 3 characters (got 4)".to_string()]
        );
    }
}
