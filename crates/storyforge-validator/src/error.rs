//! Validator error types

use thiserror::Error;

/// Errors raised while setting up a validator
///
/// Validation outcomes themselves are data (`ValidationResult`), never errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
