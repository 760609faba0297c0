//! StoryForge Domain Layer
//!
//! Value types shared by the extraction engine, the validator and whatever UI
//! layer consumes their output. Nothing in here parses text or performs I/O;
//! records are built by `storyforge-extractor` and handed to the caller
//! wholesale.
//!
//! ## Key Concepts
//!
//! - **ExtractedChapter**: one chapter descriptor recovered from model output
//! - **ExtractionResult**: chapters in detection order, plus scan counters
//! - **StoryProposal**: the project seed produced by the "create from media" flow
//! - **ContentKind**: the declared type of a block of model output
//! - **CharacterRef**: caller-side resolution of raw character names

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chapter;
pub mod character;
pub mod content;
pub mod proposal;

// Re-exports for convenience
pub use chapter::{ChapterField, ExtractedChapter, ExtractionMetadata, ExtractionResult};
pub use character::{resolve_characters, CharacterRef};
pub use content::ContentKind;
pub use proposal::StoryProposal;
