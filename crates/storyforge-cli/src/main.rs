//! StoryForge CLI - Recover chapters and story proposals from model output.

use clap::Parser;
use storyforge_cli::commands;
use storyforge_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> storyforge_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(preset) = cli.preset {
        config.extractor = preset.into();
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let extractor = config.build_extractor()?;

    match cli.command {
        Command::Chapters(args) => commands::execute_chapters(args, &extractor, &formatter)?,
        Command::Proposal(args) => commands::execute_proposal(args, &extractor, &formatter)?,
        Command::Extract(args) => commands::execute_extract(args, &extractor, &formatter)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
