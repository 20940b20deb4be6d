//! Analyze command: scores a single entry.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use super::formatting::{render_result_text, to_structured, OutputFormat};
use crate::api::{handle_analyze, AnalyzeRequest};
use crate::sentiment::CulturalContext;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Entry text. Read from --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Reads the entry from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Author prefers collective over individual framing.
    #[arg(long)]
    pub collectivist: bool,

    /// Author is a first-generation professional.
    #[arg(long)]
    pub first_gen: bool,

    /// Author's self-described ethnicity.
    #[arg(long, value_name = "ETHNICITY")]
    pub ethnicity: Option<String>,

    /// Author's profession or field.
    #[arg(long, value_name = "PROFESSION")]
    pub profession: Option<String>,

    /// Enriches the result with a language model.
    #[arg(long)]
    pub deep: bool,

    /// Overrides the model used for deep analysis.
    #[arg(long, value_name = "MODEL", requires = "deep")]
    pub model: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl AnalyzeCommand {
    /// Builds the author context from flags, if any flag was given.
    pub fn flag_context(&self) -> Option<CulturalContext> {
        let context = CulturalContext {
            ethnicity: self.ethnicity.clone(),
            is_first_gen: self.first_gen.then_some(true),
            collectivist_orientation: self.collectivist.then_some(true),
            profession: self.profession.clone(),
        };
        (!context.is_empty()).then_some(context)
    }

    /// Executes the analyze command.
    pub async fn execute(self) -> Result<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => super::read_input(self.file.as_deref())?,
        };
        let analyzer = if self.deep {
            Some(super::build_analyzer(self.model.as_deref())?)
        } else {
            None
        };

        let request = AnalyzeRequest {
            text,
            cultural_context: self.flag_context().or_else(super::default_context),
            use_deep_analysis: Some(self.deep),
        };
        let (status, response) = handle_analyze(request, analyzer.as_ref()).await;

        let Some(result) = response.result else {
            bail!(
                "{} ({status})",
                response.error.unwrap_or_else(|| "Analysis failed".to_string())
            );
        };

        let output = match self.format {
            OutputFormat::Text => render_result_text(&result),
            format => to_structured(&result, format)?,
        };
        println!("{}", output.trim_end());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> AnalyzeCommand {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Analyze(cmd) => cmd,
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn no_flags_means_no_context() {
        let cmd = parse(&["kintsugi", "analyze", "a good day"]);
        assert_eq!(cmd.text.as_deref(), Some("a good day"));
        assert!(cmd.flag_context().is_none());
        assert_eq!(cmd.format, OutputFormat::Json);
    }

    #[test]
    fn flags_build_context() {
        let cmd = parse(&[
            "kintsugi",
            "analyze",
            "--collectivist",
            "--first-gen",
            "--profession",
            "nurse",
            "--format",
            "text",
            "we did it",
        ]);
        let context = cmd.flag_context().unwrap();
        assert!(context.collectivist());
        assert!(context.first_gen());
        assert_eq!(context.profession.as_deref(), Some("nurse"));
        assert!(context.ethnicity.is_none());
        assert_eq!(cmd.format, OutputFormat::Text);
    }

    #[test]
    fn text_and_file_conflict() {
        assert!(
            Cli::try_parse_from(["kintsugi", "analyze", "hi", "--file", "entry.txt"]).is_err()
        );
    }

    #[test]
    fn model_requires_deep() {
        assert!(Cli::try_parse_from(["kintsugi", "analyze", "hi", "--model", "m"]).is_err());
        assert!(
            Cli::try_parse_from(["kintsugi", "analyze", "hi", "--deep", "--model", "m"]).is_ok()
        );
    }
}
