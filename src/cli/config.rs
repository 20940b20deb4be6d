//! Configuration-related CLI commands.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::sentiment::CulturalContext;
use crate::utils::{check_ai_credentials, Settings};

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the resolved settings and AI provider.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {}

/// Resolved configuration as printed by `config show`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReport {
    /// Settings file location.
    pub settings_path: String,
    /// Whether the settings file exists.
    pub settings_found: bool,
    /// Settings `env` entries with credentials masked.
    pub env: BTreeMap<String, String>,
    /// Default author context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<CulturalContext>,
    /// Provider used for deep analysis, or why none is available.
    pub ai: AiReport,
}

/// Deep-analysis availability.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AiReport {
    /// A provider is configured.
    Available {
        /// Provider display name.
        provider: String,
        /// Model that would be used.
        model: String,
    },
    /// No provider is usable.
    Unavailable {
        /// Reason reported by the preflight check.
        error: String,
    },
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Builds the report for the settings at the default location.
    pub fn report() -> Result<ConfigReport> {
        let path = Settings::get_settings_path()?;
        let settings = Settings::load_from_path(&path)?.redacted();

        let ai = match check_ai_credentials(None) {
            Ok(info) => AiReport::Available {
                provider: info.provider.to_string(),
                model: info.model,
            },
            Err(e) => AiReport::Unavailable {
                error: e.to_string(),
            },
        };

        Ok(ConfigReport {
            settings_found: path.exists(),
            settings_path: path.display().to_string(),
            env: settings.env.into_iter().collect(),
            cultural_context: settings.cultural_context,
            ai,
        })
    }

    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let report = Self::report()?;
        let yaml = serde_yaml::to_string(&report).context("Failed to serialize configuration")?;
        println!("{}", yaml.trim_end());
        Ok(())
    }
}
