//! StoryForge Extractor
//!
//! Turns free-form model output into structured story records.
//!
//! # Overview
//!
//! Generation prompts ask the model for labeled chapter outlines or for a
//! JSON story proposal, and the model answers with whatever formatting it
//! likes: markdown headings, bullets, escaped newlines, prose around the
//! JSON. This crate recovers the records anyway. Malformed input is never an
//! error; it yields an empty result or `None`.
//!
//! # Architecture
//!
//! ```text
//! Chapters:  text → normalize → lines → heading cascade ─┬→ open chapter → ExtractionResult
//!                                        field classifier ┘   (fallback summary)
//!
//! Proposal:  text → JSON envelope → StoryProposal → ProposalValidator → ValidationResult
//! ```
//!
//! # Key Features
//!
//! - **Heading cascade**: `第N章`, `N.`, `【第N章】`, `Chapter N`, `章N:`, `N．`, `N-`
//! - **Alias groups**: configurable label spellings per field, Japanese and English by default
//! - **First write wins**: a repeated label never overwrites an earlier value
//! - **Envelope extraction**: the first `{` to the last `}`, parsed as a proposal
//!
//! # Example Usage
//!
//! ```
//! use storyforge_extractor::{Extractor, ExtractorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let result = extractor.extract_chapters(
//!     "第1章: 目覚め\n概要: 少年が目を覚ます\n\n2. 旅立ち\n雰囲気: 希望",
//! );
//! assert_eq!(result.chapters.len(), 2);
//! assert_eq!(result.chapters[1].mood.as_deref(), Some("希望"));
//!
//! let proposal = extractor.extract_story_proposal(
//!     r#"Sure! {"title":"星の海","theme":"再生","mainGenre":"SF","description":"d","synopsis":"s"}"#,
//! );
//! let validation = extractor.validate_story_proposal(proposal.as_ref().unwrap());
//! assert!(validation.valid);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod boundary;
mod chapters;
mod config;
mod envelope;
mod error;
mod extractor;
mod fields;
mod normalize;
mod split;
mod types;


pub use boundary::{detect_boundary, detect_heading, Heading, HeadingStyle};
pub use config::{ExtractorConfig, LabelConfig};
pub use envelope::{extract_envelope, extract_story_proposal, try_extract_story_proposal};
pub use error::ExtractorError;
pub use extractor::{extract_chapters, Extractor};
pub use fields::{assign_field, Assignment, FallbackPolicy, FieldClassifier};
pub use normalize::normalize;
pub use split::split_list;
pub use types::Extracted;

pub use storyforge_validator::validate_story_proposal;
