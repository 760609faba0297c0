//! Core Extractor implementation

use crate::chapters;
use crate::config::ExtractorConfig;
use crate::envelope;
use crate::error::ExtractorError;
use crate::fields::{FallbackPolicy, FieldClassifier};
use crate::types::Extracted;
use std::sync::LazyLock;
use storyforge_domain::{ContentKind, ExtractionResult, StoryProposal};
use storyforge_validator::{ProposalValidator, ValidationResult};
use tracing::debug;

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// The Extractor turns free-form model output into structured records
///
/// Holds the compiled label patterns and the proposal validator. Immutable
/// once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    classifier: FieldClassifier,
    fallback: FallbackPolicy,
    validator: ProposalValidator,
}

impl Extractor {
    /// Create a new Extractor
    ///
    /// Fails when the configuration is invalid or a label alias cannot be
    /// compiled.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        let classifier = FieldClassifier::new(&config.labels)?;
        let fallback = FallbackPolicy::new(&config);
        debug!(
            "Extractor ready: {} reserved prefixes, fallback threshold {}",
            config.reserved_prefixes.len(),
            config.fallback_min_chars
        );

        Ok(Self {
            config,
            classifier,
            fallback,
            validator: ProposalValidator::default_config(),
        })
    }

    /// Replace the proposal validator
    pub fn with_validator(mut self, validator: ProposalValidator) -> Self {
        self.validator = validator;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Recover chapter descriptors from a chapter-outline response
    pub fn extract_chapters(&self, text: &str) -> ExtractionResult {
        chapters::run(text, &self.classifier, &self.fallback)
    }

    /// Recover a story proposal from a proposal response
    pub fn extract_story_proposal(&self, text: &str) -> Option<StoryProposal> {
        envelope::extract_story_proposal(text)
    }

    /// Like [`extract_story_proposal`](Self::extract_story_proposal), with the reason on failure
    pub fn try_extract_story_proposal(&self, text: &str) -> Result<StoryProposal, ExtractorError> {
        envelope::try_extract_story_proposal(text)
    }

    /// Check a proposal against the configured limits
    pub fn validate_story_proposal(&self, proposal: &StoryProposal) -> ValidationResult {
        self.validator.validate(proposal)
    }

    /// Extract according to the declared content kind
    ///
    /// Proposals are validated as part of the call.
    pub fn extract(&self, kind: ContentKind, text: &str) -> Extracted {
        match kind {
            ContentKind::Chapters => Extracted::Chapters(self.extract_chapters(text)),
            ContentKind::StoryProposal => {
                let proposal = self.extract_story_proposal(text);
                let validation = proposal.as_ref().map(|p| self.validate_story_proposal(p));
                Extracted::Proposal {
                    proposal,
                    validation,
                }
            }
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default()).expect("built-in configuration is valid")
    }
}

/// Recover chapter descriptors using the default configuration
///
/// # Examples
///
/// ```
/// use storyforge_extractor::extract_chapters;
///
/// let result = extract_chapters("第1章: 目覚め\n概要: 少年が目を覚ます\n設定・場所: 森の中");
/// assert_eq!(result.chapters.len(), 1);
/// assert_eq!(result.chapters[0].title, "目覚め");
/// assert_eq!(result.chapters[0].setting.as_deref(), Some("森の中"));
/// ```
pub fn extract_chapters(text: &str) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract_chapters(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyforge_validator::ValidationConfig;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ExtractorConfig::default();
        config.fallback_min_chars = 0;
        assert!(matches!(Extractor::new(config), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_japanese_only_ignores_english_labels() {
        let extractor = Extractor::new(ExtractorConfig::japanese_only()).unwrap();
        let result = extractor.extract_chapters("Chapter 1: Dawn\nSetting: Forest\n場所: 森");
        assert_eq!(result.chapters[0].setting.as_deref(), Some("森"));
    }

    #[test]
    fn test_lenient_threshold() {
        let extractor = Extractor::new(ExtractorConfig::lenient()).unwrap();
        let result = extractor.extract_chapters("第1章: 朝\n少年が走る。");
        assert_eq!(result.chapters[0].summary.as_deref(), Some("少年が走る。"));

        let strict = Extractor::default().extract_chapters("第1章: 朝\n少年が走る。");
        assert_eq!(strict.chapters[0].summary, None);
    }

    #[test]
    fn test_extract_dispatches_on_kind() {
        let extractor = Extractor::default();

        let chapters = extractor.extract(ContentKind::Chapters, "第1章: 朝");
        assert!(matches!(chapters, Extracted::Chapters(ref r) if r.len() == 1));

        let text = r#"{"title":"T","theme":"a","mainGenre":"b","description":"c","synopsis":"d"}"#;
        match extractor.extract(ContentKind::StoryProposal, text) {
            Extracted::Proposal {
                proposal,
                validation,
            } => {
                assert_eq!(proposal.map(|p| p.title), Some("T".to_string()));
                assert_eq!(validation.map(|v| v.valid), Some(true));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_proposal_has_no_validation() {
        let extracted = Extractor::default().extract(ContentKind::StoryProposal, "none");
        assert_eq!(
            extracted,
            Extracted::Proposal {
                proposal: None,
                validation: None
            }
        );
    }

    #[test]
    fn test_custom_validator_limits() {
        let validator = ProposalValidator::new(ValidationConfig {
            title_max_chars: 3,
            ..ValidationConfig::default()
        });
        let extractor = Extractor::default().with_validator(validator);
        let text =
            r#"{"title":"Long","theme":"a","mainGenre":"b","description":"c","synopsis":"d"}"#;
        let proposal = extractor.extract_story_proposal(text).unwrap();
        assert_eq!(
            extractor.validate_story_proposal(&proposal).messages(),
            vec!["title must be at most 3 characters (got 4)".to_string()]
        );
    }

    #[test]
    fn test_extractor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }
}
