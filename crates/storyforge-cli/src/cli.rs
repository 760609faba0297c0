//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use storyforge_domain::ContentKind;
use storyforge_extractor::ExtractorConfig;

/// StoryForge CLI - Recover chapters and story proposals from model output.
#[derive(Debug, Parser)]
#[command(name = "storyforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STORYFORGE_CONFIG")]
    pub config: Option<String>,

    /// Label preset, replacing the configured extractor settings
    #[arg(short, long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    /// Log extraction decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (titles only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract chapter outlines
    Chapters(InputArgs),

    /// Extract and validate a story proposal
    Proposal(InputArgs),

    /// Extract content of a declared kind
    Extract(ExtractArgs),
}

/// Input selection shared by every command.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// File with the model output; stdin when absent or "-"
    pub file: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Content kind: chapters or story_proposal
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: ContentKind,

    #[command(flatten)]
    pub input: InputArgs,
}

fn parse_kind(s: &str) -> Result<ContentKind, String> {
    ContentKind::parse(s).ok_or_else(|| format!("unknown content kind '{}'", s))
}

/// Extractor presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Japanese and English labels
    Default,
    /// Japanese labels only
    Japanese,
    /// Extra aliases, shorter fallback threshold
    Lenient,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for ExtractorConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => ExtractorConfig::default(),
            PresetArg::Japanese => ExtractorConfig::japanese_only(),
            PresetArg::Lenient => ExtractorConfig::lenient(),
        }
    }
}
