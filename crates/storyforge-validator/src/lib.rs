//! StoryForge Validator
//!
//! Shape validation for assembled story proposals.
//!
//! The validator provides:
//! - Required-field presence checks (non-empty after trim)
//! - Length ceilings on title, description and synopsis
//!
//! Every violation is collected, nothing is truncated, and nothing is thrown:
//! the caller gets a complete list to show the user.
//!
//! # Examples
//!
//! ```
//! use storyforge_domain::StoryProposal;
//! use storyforge_validator::{ProposalValidator, ValidationConfig};
//!
//! let proposal = StoryProposal {
//!     title: "星の海".into(),
//!     theme: "再生".into(),
//!     main_genre: "SF".into(),
//!     description: "漂流する少女の物語".into(),
//!     synopsis: "".into(),
//!     sub_genre: None,
//!     target_reader: None,
//!     image_analysis: None,
//!     audio_analysis: None,
//!     integrated_analysis: None,
//!     transcription: None,
//! };
//!
//! let validator = ProposalValidator::new(ValidationConfig::default());
//! let result = validator.validate(&proposal);
//! assert!(!result.valid);
//! assert_eq!(result.messages(), vec!["synopsis is required".to_string()]);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{validate_story_proposal, ProposalValidator, ValidationResult, Violation};
pub use error::ValidatorError;
pub use config::ValidationConfig;
