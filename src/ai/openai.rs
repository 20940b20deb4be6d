//! OpenAI-compatible API client implementation (works with OpenAI, Ollama, etc.)

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AiClient, AiClientMetadata, AiError};

/// Default OpenAI API endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
/// Default local Ollama endpoint.
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// OpenAI API request message
#[derive(Serialize, Debug)]
struct Message {
    role: String,
    content: String,
}

/// OpenAI API request body
#[derive(Serialize, Debug)]
struct OpenAiRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

/// OpenAI API response choice
#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

/// OpenAI API response message
#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI API response
#[derive(Deserialize, Debug)]
struct OpenAiResponse {
    choices: Vec<Choice>,
    model: Option<String>,
}

/// OpenAI-compatible API client (works with OpenAI, Ollama, etc.)
pub struct OpenAiAiClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication (optional for Ollama)
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// Base URL for the API (e.g., "https://api.openai.com" or "http://localhost:11434")
    base_url: String,
    /// Maximum tokens for responses
    max_tokens: u32,
    /// Temperature for response generation
    temperature: Option<f32>,
}

impl OpenAiAiClient {
    /// Create a new OpenAI-compatible API client
    pub fn new(
        model: String,
        api_key: Option<String>,
        base_url: String,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<Self> {
        Ok(Self {
            client: super::build_http_client()?,
            api_key,
            model,
            base_url,
            max_tokens: max_tokens.unwrap_or(super::DEFAULT_MAX_TOKENS),
            temperature,
        })
    }

    /// Create a new client for Ollama with sensible defaults
    pub fn new_ollama(model: String, base_url: Option<String>) -> Result<Self> {
        Self::new(
            model,
            None,
            base_url.unwrap_or_else(|| OLLAMA_BASE_URL.to_string()),
            None,
            Some(0.1),
        )
    }

    /// Create a new client for OpenAI with sensible defaults
    pub fn new_openai(model: String, api_key: String) -> Result<Self> {
        Self::new(
            model,
            Some(api_key),
            OPENAI_BASE_URL.to_string(),
            None,
            Some(0.1),
        )
    }

    /// Build the full API URL
    fn get_api_url(&self) -> String {
        let url = super::join_url(&self.base_url, "/v1/chat/completions");
        debug!(base_url = %self.base_url, full_url = %url, "Constructed OpenAI-compatible API URL");
        url
    }

    /// Determine if this is likely an Ollama instance
    fn is_ollama(&self) -> bool {
        self.base_url.contains("localhost")
            || self.base_url.contains("127.0.0.1")
            || self.api_key.is_none()
    }

    /// Determine if this model only accepts `max_completion_tokens`
    fn uses_completion_tokens(&self) -> bool {
        self.model.starts_with("gpt-5") || self.model.starts_with("o1")
    }

    fn build_request(&self, system_prompt: &str, user_prompt: &str) -> OpenAiRequest {
        let mut messages = Vec::new();
        if !system_prompt.is_empty() {
            messages.push(Message {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            });
        }
        messages.push(Message {
            role: "user".to_string(),
            content: user_prompt.to_string(),
        });

        if self.uses_completion_tokens() {
            OpenAiRequest {
                model: self.model.clone(),
                messages,
                max_tokens: None,
                max_completion_tokens: Some(self.max_tokens),
                temperature: None,
                stream: false,
            }
        } else {
            OpenAiRequest {
                model: self.model.clone(),
                messages,
                max_tokens: Some(self.max_tokens),
                max_completion_tokens: None,
                temperature: self.temperature,
                stream: false,
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        if self.is_ollama() {
            "Ollama"
        } else {
            "OpenAI"
        }
    }
}

impl AiClient for OpenAiAiClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.build_request(system_prompt, user_prompt);
            debug!(
                max_tokens = self.max_tokens,
                effective_temperature = ?request.temperature,
                message_count = request.messages.len(),
                is_ollama = self.is_ollama(),
                "Built OpenAI-compatible request payload"
            );

            let api_url = self.get_api_url();
            info!(url = %api_url, model = %self.model, "Sending request to OpenAI-compatible API");

            let mut req_builder = self
                .client
                .post(&api_url)
                .header("Content-Type", "application/json")
                .json(&request);

            if let Some(ref api_key) = self.api_key {
                req_builder = req_builder.header("Authorization", format!("Bearer {api_key}"));
            }

            let response = req_builder
                .send()
                .await
                .map_err(|e| AiError::NetworkError(e.to_string()))?;

            let response = super::check_error_response(response).await?;

            let openai_response: OpenAiResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            debug!(
                choice_count = openai_response.choices.len(),
                model = ?openai_response.model,
                "Received OpenAI-compatible API response"
            );

            let result = openai_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No choices in response".to_string()).into()
                });

            super::log_response_success(self.provider_name(), &result);
            result
        })
    }

    fn get_metadata(&self) -> AiClientMetadata {
        AiClientMetadata {
            provider: self.provider_name().to_string(),
            model: self.model.clone(),
            max_response_length: self.max_tokens as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn new_ollama_defaults() {
        let client = OpenAiAiClient::new_ollama("llama3".to_string(), None).unwrap();
        assert_eq!(client.base_url, OLLAMA_BASE_URL);
        assert!(client.api_key.is_none());
        assert!(client.is_ollama());
        assert_eq!(client.get_metadata().provider, "Ollama");
    }

    #[test]
    fn new_openai_defaults() {
        let client = OpenAiAiClient::new_openai("gpt-4o".to_string(), "sk-test".to_string())
            .unwrap();
        assert_eq!(client.base_url, OPENAI_BASE_URL);
        assert!(!client.is_ollama());
        assert_eq!(client.get_metadata().provider, "OpenAI");
    }

    #[test]
    fn api_url_trailing_slash() {
        let client = OpenAiAiClient::new(
            "m".to_string(),
            None,
            "http://localhost:11434/".to_string(),
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            client.get_api_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn completion_token_models_drop_temperature() {
        let client = OpenAiAiClient::new_openai("gpt-5".to_string(), "k".to_string()).unwrap();
        let request = client.build_request("", "hi");
        assert_eq!(
            request.max_completion_tokens,
            Some(crate::ai::DEFAULT_MAX_TOKENS)
        );
        assert!(request.max_tokens.is_none());
        assert!(request.temperature.is_none());
        assert_eq!(request.messages.len(), 1);
    }

    #[tokio::test]
    async fn sends_bearer_and_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({"model": "gpt-4o", "stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4o",
                "choices": [{"message": {"role": "assistant", "content": "hello"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiAiClient::new(
            "gpt-4o".to_string(),
            Some("sk-test".to_string()),
            server.uri(),
            None,
            None,
        )
        .unwrap();
        let text = client.send_request("sys", "user").await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn empty_choices_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = OpenAiAiClient::new_ollama("llama3".to_string(), Some(server.uri())).unwrap();
        let err = client.send_request("sys", "user").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AiError>(),
            Some(AiError::InvalidResponseFormat(_))
        ));
    }
}
