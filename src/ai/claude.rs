//! Anthropic Messages API client implementation.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AiClient, AiClientMetadata, AiError};

/// Default Anthropic API endpoint.
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Claude API request message.
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Claude API request body.
#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

/// Claude API response content.
#[derive(Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

/// Claude API response.
#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<Content>,
}

/// Claude API client implementation.
pub struct ClaudeAiClient {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier.
    model: String,
    /// API base URL.
    base_url: String,
    /// Response token budget.
    max_tokens: u32,
}

impl ClaudeAiClient {
    /// Creates a new Claude AI client against the public Anthropic endpoint.
    pub fn new(model: String, api_key: String) -> Result<Self> {
        Ok(Self {
            client: super::build_http_client()?,
            api_key,
            model,
            base_url: ANTHROPIC_BASE_URL.to_string(),
            max_tokens: super::DEFAULT_MAX_TOKENS,
        })
    }

    /// Points the client at a different API base URL (proxies, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn messages_url(&self) -> String {
        super::join_url(&self.base_url, "/v1/messages")
    }
}

impl AiClient for ClaudeAiClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            debug!(
                system_prompt_len = system_prompt.len(),
                user_prompt_len = user_prompt.len(),
                model = %self.model,
                "Preparing Claude API request"
            );

            let request = ClaudeRequest {
                model: self.model.clone(),
                max_tokens: self.max_tokens,
                system: system_prompt.to_string(),
                messages: vec![Message {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                }],
            };

            let url = self.messages_url();
            info!(url = %url, model = %self.model, "Sending request to Claude API");

            let response = self
                .client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", "2023-06-01")
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| AiError::NetworkError(e.to_string()))?;

            let response = super::check_error_response(response).await?;

            let claude_response: ClaudeResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            debug!(
                content_count = claude_response.content.len(),
                "Received Claude API response"
            );

            let result = claude_response
                .content
                .into_iter()
                .find(|c| c.content_type == "text")
                .map(|c| c.text)
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No text content in response".to_string())
                        .into()
                });

            super::log_response_success("Claude", &result);
            result
        })
    }

    fn get_metadata(&self) -> AiClientMetadata {
        AiClientMetadata {
            provider: "Anthropic".to_string(),
            model: self.model.clone(),
            max_response_length: self.max_tokens as usize,
        }
    }
}
