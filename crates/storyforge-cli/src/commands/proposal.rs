//! Proposal command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use storyforge_extractor::Extractor;

/// Execute the proposal command.
///
/// Fails with [`CliError::NoProposal`] when the input holds no usable
/// proposal. Validation violations are reported in the output, not as an
/// error.
pub fn execute_proposal(
    args: InputArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    println!("{}", render_proposal(&text, extractor, formatter)?);
    Ok(())
}

/// Extract and validate a proposal from `text` and format it.
pub fn render_proposal(text: &str, extractor: &Extractor, formatter: &Formatter) -> Result<String> {
    let proposal = extractor
        .try_extract_story_proposal(text)
        .map_err(|e| CliError::NoProposal(e.to_string()))?;
    let validation = extractor.validate_story_proposal(&proposal);
    formatter.format_proposal(&proposal, &validation)
}
