//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use storyforge_domain::{ExtractionResult, StoryProposal};
use storyforge_validator::ValidationResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest cell shown in table output, in characters
const MAX_CELL_CHARS: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted chapters.
    pub fn format_chapters(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_chapters_table(result)),
            OutputFormat::Quiet => Ok(result
                .chapters
                .iter()
                .map(|c| format!("{}\t{}", c.ordinal, c.title))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_chapters_table(&self, result: &ExtractionResult) -> String {
        if result.is_empty() {
            return self.warning("No chapters found.");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "#",
            "Title",
            "Summary",
            "Setting",
            "Mood",
            "Key Events",
            "Characters",
        ]);

        for chapter in &result.chapters {
            builder.push_record([
                chapter.ordinal.to_string(),
                truncate(&chapter.title),
                truncate(chapter.summary.as_deref().unwrap_or("-")),
                truncate(chapter.setting.as_deref().unwrap_or("-")),
                truncate(chapter.mood.as_deref().unwrap_or("-")),
                truncate(&join_or_dash(&chapter.key_events)),
                truncate(&join_or_dash(&chapter.characters)),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let incomplete = result.incomplete().count();
        let footer = format!(
            "{} chapter(s), {} incomplete, {} line(s) discarded",
            result.len(),
            incomplete,
            result.metadata.lines_discarded
        );
        format!("{}\n{}", table, self.info(&footer))
    }

    /// Format a proposal with its validation result.
    pub fn format_proposal(
        &self,
        proposal: &StoryProposal,
        validation: &ValidationResult,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "proposal": proposal,
                "validation": validation,
            }))?),
            OutputFormat::Table => Ok(self.format_proposal_table(proposal, validation)),
            OutputFormat::Quiet => Ok(proposal.title.clone()),
        }
    }

    fn format_proposal_table(
        &self,
        proposal: &StoryProposal,
        validation: &ValidationResult,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        for (key, value) in proposal.required_fields() {
            builder.push_record([key.to_string(), truncate(value)]);
        }
        for (key, value) in proposal.optional_fields() {
            if let Some(value) = value {
                builder.push_record([key.to_string(), truncate(value)]);
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![table.to_string()];
        if validation.valid {
            lines.push(self.success("Proposal is valid"));
        } else {
            lines.extend(validation.messages().iter().map(|m| self.error(m)));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Shorten a cell to [`MAX_CELL_CHARS`] characters
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
    format!("{}…", head)
}
