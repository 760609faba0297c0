//! Result types for kind-dispatched extraction

use serde::Serialize;
use storyforge_domain::{ContentKind, ExtractionResult, StoryProposal};
use storyforge_validator::ValidationResult;

/// Output of [`Extractor::extract`](crate::Extractor::extract)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extracted {
    /// Chapters parsed from a chapter-outline response
    Chapters(ExtractionResult),

    /// A proposal parsed from a proposal response
    Proposal {
        /// The proposal, if one could be extracted
        proposal: Option<StoryProposal>,
        /// Validation of the proposal; absent when there is none
        validation: Option<ValidationResult>,
    },
}

impl Extracted {
    /// Which kind of content this is
    pub fn kind(&self) -> ContentKind {
        match self {
            Extracted::Chapters(_) => ContentKind::Chapters,
            Extracted::Proposal { .. } => ContentKind::StoryProposal,
        }
    }

    /// Whether anything usable was extracted
    pub fn is_empty(&self) -> bool {
        match self {
            Extracted::Chapters(result) => result.is_empty(),
            Extracted::Proposal { proposal, .. } => proposal.is_none(),
        }
    }
}
