//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{check_ai_credentials, AiCredentialInfo, AiProvider};
pub use settings::{get_env_var, get_env_vars, Settings};
