//! Language-model client error handling.

use thiserror::Error;

/// Errors raised while talking to a language-model API.
#[derive(Error, Debug)]
pub enum AiError {
    /// API key not found in environment variables or settings.
    #[error("{provider} API key not found. Set one of: {}", .variables.join(", "))]
    ApiKeyNotFound {
        /// Provider display name.
        provider: String,
        /// Variables that were checked.
        variables: Vec<String>,
    },

    /// API request failed with error message.
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Invalid response format from the API.
    #[error("Invalid response format from API: {0}")]
    InvalidResponseFormat(String),

    /// The model's reply could not be read as a sentiment assessment.
    #[error("Failed to parse sentiment assessment from model response: {0}")]
    AssessmentParsingFailed(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Please try again later")]
    RateLimitExceeded,

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_message_lists_variables() {
        let err = AiError::ApiKeyNotFound {
            provider: "Claude".to_string(),
            variables: vec!["CLAUDE_API_KEY".to_string(), "ANTHROPIC_API_KEY".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Claude API key not found. Set one of: CLAUDE_API_KEY, ANTHROPIC_API_KEY"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = AiError::RateLimitExceeded.into();
        assert!(err.downcast_ref::<AiError>().is_some());
    }
}
