//! Request and response contract for analyzing a single entry.
//!
//! This is the transport-independent core of an "analyze" endpoint: it
//! validates the request, runs local or enriched analysis, and reports an
//! HTTP status alongside a JSON-serializable response body.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::enrich::SmartAnalyzer;
use crate::sentiment::{
    analyze_local_sentiment, analyze_with_cultural_context, CulturalContext, SentimentResult,
};

/// Longest accepted entry, in characters.
pub const MAX_TEXT_LEN: usize = 10_000;

/// Body of an analyze request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Entry text.
    #[serde(default)]
    pub text: String,
    /// Optional author context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<CulturalContext>,
    /// Request model enrichment when an analyzer is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_deep_analysis: Option<bool>,
}

/// Body of an analyze response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Whether analysis ran.
    pub success: bool,
    /// The analysis result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SentimentResult>,
    /// Human-readable error on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    fn ok(result: SentimentResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Validation failures for an analyze request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The text is missing or whitespace-only.
    #[error("Text is required")]
    EmptyText,

    /// The text exceeds [`MAX_TEXT_LEN`].
    #[error("Text is too long ({length} characters, maximum is {max})")]
    TooLong {
        /// Length of the submitted text in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

impl RequestError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Checks an analyze request before any analysis runs.
pub fn validate_request(request: &AnalyzeRequest) -> Result<(), RequestError> {
    if request.text.trim().is_empty() {
        return Err(RequestError::EmptyText);
    }
    let length = request.text.chars().count();
    if length > MAX_TEXT_LEN {
        return Err(RequestError::TooLong {
            length,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Handles an analyze request.
///
/// Deep analysis runs only when requested and an analyzer is supplied;
/// otherwise the local pipeline runs, with cultural annotation when the
/// request carries a context.
pub async fn handle_analyze(
    request: AnalyzeRequest,
    analyzer: Option<&SmartAnalyzer>,
) -> (StatusCode, AnalyzeResponse) {
    if let Err(e) = validate_request(&request) {
        warn!(error = %e, "Rejected analyze request");
        return (e.status(), AnalyzeResponse::failed(e));
    }

    let context = request.cultural_context.as_ref();
    let deep = request.use_deep_analysis.unwrap_or(false);
    debug!(
        text_len = request.text.len(),
        deep,
        has_context = context.is_some(),
        "Handling analyze request"
    );

    let result = match (deep, analyzer) {
        (true, Some(analyzer)) => analyzer.analyze(&request.text, context).await,
        (true, None) => {
            debug!("Deep analysis requested without an analyzer, using local analysis");
            local_result(&request.text, context)
        }
        (false, _) => local_result(&request.text, context),
    };

    (StatusCode::OK, AnalyzeResponse::ok(result))
}

fn local_result(text: &str, context: Option<&CulturalContext>) -> SentimentResult {
    match context {
        Some(context) => analyze_with_cultural_context(text, context),
        None => analyze_local_sentiment(text),
    }
}
