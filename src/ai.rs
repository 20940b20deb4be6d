//! Language-model client trait and shared helpers.

pub mod claude;
pub mod error;
pub mod openai;
#[cfg(test)]
pub(crate) mod test_utils;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::info;

pub use claude::ClaudeAiClient;
pub use error::AiError;
pub use openai::OpenAiAiClient;

use crate::utils::preflight::{
    check_ai_credentials, AiProvider, CLAUDE_KEY_VARS, OPENAI_KEY_VARS,
};
use crate::utils::settings::{get_env_var, get_env_vars};

/// HTTP request timeout for model API calls.
///
/// Assessments are short, so a slow reply is treated as a failure and the
/// caller falls back to the local result.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Response token budget for a sentiment assessment.
pub(crate) const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Metadata about an AI client implementation.
#[derive(Clone, Debug)]
pub struct AiClientMetadata {
    /// Service provider name.
    pub provider: String,
    /// Model identifier.
    pub model: String,
    /// Maximum token response length requested.
    pub max_response_length: usize,
}

// ── Shared helpers for AI client implementations ────────────────────

/// Builds an HTTP client with the standard request timeout.
pub(crate) fn build_http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Joins a base URL and an API path, tolerating a trailing slash.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Checks an HTTP response for error status and returns a structured error
/// if non-success.
pub(crate) async fn check_error_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimitExceeded.into());
    }
    let error_text = response.text().await.unwrap_or_else(|e| {
        tracing::debug!("Failed to read error response body: {e}");
        String::new()
    });
    Err(AiError::ApiRequestFailed(format!("HTTP {status}: {error_text}")).into())
}

/// Logs successful text extraction from an AI API response.
pub(crate) fn log_response_success(provider: &str, result: &Result<String>) {
    if let Ok(text) = result {
        tracing::debug!(
            response_len = text.len(),
            "Successfully extracted text content from {} API response",
            provider
        );
        tracing::trace!(
            response_content = %text,
            "{} API response content",
            provider
        );
    }
}

/// Trait for AI service clients.
pub trait AiClient: Send + Sync {
    /// Sends a request to the AI service and returns the raw response.
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    /// Returns metadata about the AI client implementation.
    fn get_metadata(&self) -> AiClientMetadata;
}

/// Creates a client for the provider selected by environment and settings.
///
/// Credentials are validated up front so a missing key fails before any
/// text is sent.
pub fn create_default_client(model_override: Option<&str>) -> Result<Box<dyn AiClient>> {
    let info = check_ai_credentials(model_override)?;
    info!(provider = %info.provider, model = %info.model, "Creating AI client");

    let client: Box<dyn AiClient> = match info.provider {
        AiProvider::Claude => {
            let api_key = get_env_vars(CLAUDE_KEY_VARS)?;
            let mut client = ClaudeAiClient::new(info.model, api_key)?;
            if let Ok(base_url) = get_env_var("ANTHROPIC_BASE_URL") {
                client = client.with_base_url(base_url);
            }
            Box::new(client)
        }
        AiProvider::OpenAi => {
            let api_key = get_env_vars(OPENAI_KEY_VARS)?;
            Box::new(OpenAiAiClient::new_openai(info.model, api_key)?)
        }
        AiProvider::Ollama => {
            let base_url = get_env_var("OLLAMA_BASE_URL").ok();
            Box::new(OpenAiAiClient::new_ollama(info.model, base_url)?)
        }
    };

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:11434/", "/v1/chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(
            join_url("https://api.anthropic.com", "/v1/messages"),
            "https://api.anthropic.com/v1/messages"
        );
    }

    #[test]
    fn log_response_success_ignores_errors() {
        // Must not panic on either variant.
        log_response_success("Test", &Ok("hello".to_string()));
        log_response_success("Test", &Err(anyhow::anyhow!("boom")));
    }
}
