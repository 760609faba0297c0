//! Declared content type of a block of model output

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the upstream generation call says it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Labeled chapter outlines
    Chapters,
    /// A JSON story proposal, possibly wrapped in prose
    StoryProposal,
}

impl ContentKind {
    /// Parse a content kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chapters" | "chapter" => Some(ContentKind::Chapters),
            "story_proposal" | "proposal" | "story-proposal" => Some(ContentKind::StoryProposal),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Chapters => "chapters",
            ContentKind::StoryProposal => "story_proposal",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
