//! Request command: runs the analyze contract over a JSON request body.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use reqwest::StatusCode;

use crate::api::{handle_analyze, AnalyzeRequest};

/// Request command options.
#[derive(Parser)]
pub struct RequestCommand {
    /// Reads the request JSON from a file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Overrides the model used when the request asks for deep analysis.
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,
}

impl RequestCommand {
    /// Executes the request command.
    pub async fn execute(self) -> Result<()> {
        let body = super::read_input(self.file.as_deref())?;
        let request: AnalyzeRequest =
            serde_json::from_str(&body).context("Failed to parse analyze request JSON")?;

        let analyzer = if request.use_deep_analysis.unwrap_or(false) {
            Some(super::build_analyzer(self.model.as_deref())?)
        } else {
            None
        };

        let (status, response) = handle_analyze(request, analyzer.as_ref()).await;
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize response")?
        );

        if status != StatusCode::OK {
            bail!("Request rejected with status {status}");
        }
        Ok(())
    }
}
