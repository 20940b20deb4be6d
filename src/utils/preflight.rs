//! Preflight validation checks for early failure detection.
//!
//! Deep analysis sends journal text to a remote model. These checks resolve
//! the provider and model from the environment and fail with a clear message
//! before any text leaves the machine.

use anyhow::Result;

use crate::ai::AiError;
use crate::utils::settings::{get_env_var, get_env_vars};

/// Default Anthropic model for deep analysis.
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
/// Default OpenAI model for deep analysis.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
/// Default Ollama model for deep analysis.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Environment variables consulted for an Anthropic key, in order.
pub const CLAUDE_KEY_VARS: &[&str] = &["CLAUDE_API_KEY", "ANTHROPIC_API_KEY", "ANTHROPIC_AUTH_TOKEN"];
/// Environment variables consulted for an OpenAI key, in order.
pub const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "OPENAI_AUTH_TOKEN"];

/// Result of AI credential validation.
#[derive(Debug)]
pub struct AiCredentialInfo {
    /// The AI provider that will be used.
    pub provider: AiProvider,
    /// The model that will be used.
    pub model: String,
}

/// AI provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    /// Anthropic Claude API.
    Claude,
    /// OpenAI API.
    OpenAi,
    /// Local Ollama.
    Ollama,
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Claude => write!(f, "Claude API"),
            Self::OpenAi => write!(f, "OpenAI API"),
            Self::Ollama => write!(f, "Ollama"),
        }
    }
}

fn flag_enabled(key: &str) -> bool {
    get_env_var(key).is_ok_and(|val| val == "true")
}

fn resolve_model(model_override: Option<&str>, env_key: &str, default: &str) -> String {
    model_override
        .map(String::from)
        .or_else(|| get_env_var(env_key).ok())
        .unwrap_or_else(|| default.to_string())
}

/// Selects the provider and verifies its credentials.
///
/// `USE_OLLAMA=true` wins over `USE_OPENAI=true`; otherwise the Anthropic
/// API is used. Ollama needs no key.
pub fn check_ai_credentials(model_override: Option<&str>) -> Result<AiCredentialInfo> {
    if flag_enabled("USE_OLLAMA") {
        return Ok(AiCredentialInfo {
            provider: AiProvider::Ollama,
            model: resolve_model(model_override, "OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
        });
    }

    if flag_enabled("USE_OPENAI") {
        get_env_vars(OPENAI_KEY_VARS).map_err(|_| AiError::ApiKeyNotFound {
            provider: "OpenAI".to_string(),
            variables: OPENAI_KEY_VARS.iter().map(ToString::to_string).collect(),
        })?;
        return Ok(AiCredentialInfo {
            provider: AiProvider::OpenAi,
            model: resolve_model(model_override, "OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
        });
    }

    get_env_vars(CLAUDE_KEY_VARS).map_err(|_| AiError::ApiKeyNotFound {
        provider: "Claude".to_string(),
        variables: CLAUDE_KEY_VARS.iter().map(ToString::to_string).collect(),
    })?;

    Ok(AiCredentialInfo {
        provider: AiProvider::Claude,
        model: resolve_model(model_override, "ANTHROPIC_MODEL", DEFAULT_CLAUDE_MODEL),
    })
}
