//! Chapters command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use storyforge_extractor::Extractor;
use tracing::debug;

/// Execute the chapters command.
pub fn execute_chapters(
    args: InputArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    println!("{}", render_chapters(&text, extractor, formatter)?);
    Ok(())
}

/// Extract chapters from `text` and format them.
pub fn render_chapters(text: &str, extractor: &Extractor, formatter: &Formatter) -> Result<String> {
    debug!("Extracting chapters from {} bytes", text.len());
    let result = extractor.extract_chapters(text);
    formatter.format_chapters(&result)
}
