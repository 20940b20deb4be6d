//! CLI interface for kintsugi.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod config;
pub mod formatting;
pub mod help;
pub mod journal;
pub mod request;

/// kintsugi: sentiment, emotion and resilience analysis for journal entries.
#[derive(Parser)]
#[command(name = "kintsugi")]
#[command(
    about = "Sentiment, emotion and resilience analysis for journal entries",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyzes a single entry.
    Analyze(analyze::AnalyzeCommand),
    /// Handles a JSON analyze request and prints the JSON response.
    Request(request::RequestCommand),
    /// Analyzes every entry in a journal file and summarizes them.
    Journal(journal::JournalCommand),
    /// Configuration information.
    Config(config::ConfigCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(cmd) => cmd.execute().await,
            Commands::Request(cmd) => cmd.execute().await,
            Commands::Journal(cmd) => cmd.execute().await,
            Commands::Config(cmd) => cmd.execute(),
            Commands::HelpAll(cmd) => cmd.execute(),
        }
    }
}

/// Reads command input from a file, or from stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the deep-analysis client, failing early when credentials are missing.
pub(crate) fn build_analyzer(model: Option<&str>) -> Result<crate::enrich::SmartAnalyzer> {
    let client = crate::ai::create_default_client(model)
        .context("Deep analysis requires a configured AI provider")?;
    let analyzer = crate::enrich::SmartAnalyzer::new(client);
    let meta = analyzer.metadata();
    tracing::info!(
        provider = %meta.provider,
        model = %meta.model,
        max_tokens = meta.max_response_length,
        "Deep analysis enabled"
    );
    Ok(analyzer)
}

/// Loads the default cultural context from settings, ignoring a missing or
/// unreadable settings file.
pub(crate) fn default_context() -> Option<crate::sentiment::CulturalContext> {
    match crate::utils::Settings::load() {
        Ok(settings) => settings.cultural_context.filter(|c| !c.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable settings file");
            None
        }
    }
}
