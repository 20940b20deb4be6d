//! Settings and configuration utilities.
//!
//! Settings are read from `$HOME/.kintsugi/settings.json`. The `env` table
//! acts as a fallback for environment variables, and `culturalContext`
//! supplies a default author context for commands that take one.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sentiment::CulturalContext;

/// Directory under `$HOME` holding kintsugi settings.
const SETTINGS_DIR: &str = ".kintsugi";

/// Settings loaded from `$HOME/.kintsugi/settings.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Default author context when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<CulturalContext>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path. A missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(SETTINGS_DIR).join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Returns a copy of the settings with secret-looking values masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let env = self
            .env
            .iter()
            .map(|(key, value)| {
                let shown = if is_secret_key(key) {
                    mask(value)
                } else {
                    value.clone()
                };
                (key.clone(), shown)
            })
            .collect();
        Self {
            env,
            cultural_context: self.cultural_context.clone(),
        }
    }
}

fn is_secret_key(key: &str) -> bool {
    let upper = key.to_ascii_uppercase();
    upper.contains("KEY") || upper.contains("TOKEN") || upper.contains("SECRET")
}

fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

/// Returns an environment variable with fallback to settings.
pub fn get_env_var(key: &str) -> Result<String> {
    if let Ok(value) = env::var(key) {
        return Ok(value);
    }
    match Settings::load() {
        Ok(settings) => settings
            .env
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {key}")),
        Err(err) => Err(anyhow::anyhow!("Environment variable not found: {key}").context(err)),
    }
}

/// Tries multiple environment variables with fallback to settings.
pub fn get_env_vars(keys: &[&str]) -> Result<String> {
    keys.iter()
        .find_map(|key| get_env_var(key).ok())
        .ok_or_else(|| anyhow::anyhow!("None of the environment variables found: {keys:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_settings(json: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, json).unwrap();
        (temp_dir, settings_path)
    }

    #[test]
    fn settings_load_from_path() {
        let (_dir, path) = write_settings(
            r#"{
                "env": {
                    "KINTSUGI_TEST_VAR": "test_value",
                    "CLAUDE_API_KEY": "test_api_key"
                },
                "culturalContext": {
                    "ethnicity": "Filipino American",
                    "isFirstGen": true
                }
            }"#,
        );

        let settings = Settings::load_from_path(&path).unwrap();

        assert_eq!(settings.env["KINTSUGI_TEST_VAR"], "test_value");
        assert_eq!(settings.env["CLAUDE_API_KEY"], "test_api_key");
        let context = settings.cultural_context.unwrap();
        assert_eq!(context.ethnicity.as_deref(), Some("Filipino American"));
        assert!(context.first_gen());
        assert!(!context.collectivist());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
        assert!(settings.cultural_context.is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let (_dir, path) = write_settings("{ not json");
        let err = Settings::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn settings_get_env_var_precedence() {
        let (_dir, path) = write_settings(r#"{"env": {"KINTSUGI_PRECEDENCE": "from_settings"}}"#);
        let settings = Settings::load_from_path(&path).unwrap();

        env::set_var("KINTSUGI_PRECEDENCE", "from_env");
        assert_eq!(
            settings.get_env_var("KINTSUGI_PRECEDENCE").as_deref(),
            Some("from_env")
        );

        env::remove_var("KINTSUGI_PRECEDENCE");
        assert_eq!(
            settings.get_env_var("KINTSUGI_PRECEDENCE").as_deref(),
            Some("from_settings")
        );
        assert!(settings.get_env_var("KINTSUGI_UNSET_VAR").is_none());
    }

    #[test]
    fn redacted_masks_credentials_only() {
        let (_dir, path) = write_settings(
            r#"{"env": {"ANTHROPIC_API_KEY": "sk-ant-123456", "OLLAMA_MODEL": "llama3", "OPENAI_AUTH_TOKEN": "abc"}}"#,
        );
        let redacted = Settings::load_from_path(&path).unwrap().redacted();
        assert_eq!(redacted.env["ANTHROPIC_API_KEY"], "sk-a****");
        assert_eq!(redacted.env["OPENAI_AUTH_TOKEN"], "****");
        assert_eq!(redacted.env["OLLAMA_MODEL"], "llama3");
    }
}
