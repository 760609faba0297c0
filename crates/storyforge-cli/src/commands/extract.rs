//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use storyforge_domain::ContentKind;
use storyforge_extractor::{Extracted, Extractor};
use tracing::debug;

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.input.file.as_deref())?;
    println!("{}", render_extract(args.kind, &text, extractor, formatter)?);
    Ok(())
}

/// Extract `text` as `kind` and format the result.
///
/// A proposal that cannot be recovered is an error, like the proposal
/// command. An empty chapter list is not.
pub fn render_extract(
    kind: ContentKind,
    text: &str,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<String> {
    debug!("Extracting {} from {} bytes", kind, text.len());
    match extractor.extract(kind, text) {
        Extracted::Chapters(result) => formatter.format_chapters(&result),
        Extracted::Proposal {
            proposal: Some(proposal),
            validation: Some(validation),
        } => formatter.format_proposal(&proposal, &validation),
        Extracted::Proposal { .. } => Err(CliError::NoProposal(
            "no usable JSON object in input".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_render_each_kind() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let extractor = Extractor::default();

        let output =
            render_extract(ContentKind::Chapters, "第1章: 目覚め", &extractor, &formatter).unwrap();
        assert_eq!(output, "1\t目覚め");

        let text =
            r#"{"title":"星の海","theme":"t","mainGenre":"g","description":"d","synopsis":"s"}"#;
        let output =
            render_extract(ContentKind::StoryProposal, text, &extractor, &formatter).unwrap();
        assert_eq!(output, "星の海");
    }

    #[test]
    fn test_missing_proposal_is_error() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let err = render_extract(
            ContentKind::StoryProposal,
            "第1章: 目覚め",
            &Extractor::default(),
            &formatter,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NoProposal(_)));
    }

    #[test]
    fn test_chapters_from_proposal_text_is_empty_not_error() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_extract(
            ContentKind::Chapters,
            r#"{"title":"T"}"#,
            &Extractor::default(),
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "");
    }
}
