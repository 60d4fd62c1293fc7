//! Configuration loading, validation, and management for hanuchat.
//!
//! Loads configuration from `~/.hanuchat/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.hanuchat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document retrieval service endpoint
    #[serde(default = "default_retrieval_url")]
    pub retrieval_url: String,

    /// Completion service endpoint
    #[serde(default = "default_completion_url")]
    pub completion_url: String,

    /// Topic key scoping this conversation's session memory
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Number of prior bot responses kept as short-term context
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Greeting shown as the transcript's initial bot entry
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Suggested starter questions the presentation layer may render
    #[serde(default = "default_faqs")]
    pub faqs: Vec<String>,
}

fn default_retrieval_url() -> String {
    "http://localhost:2305/hanu-chatbot/public-administration".into()
}
fn default_completion_url() -> String {
    "http://localhost:3000/api/chat".into()
}
fn default_topic() -> String {
    "services".into()
}
fn default_window_size() -> usize {
    5
}
fn default_greeting() -> String {
    "Ask me anything about Hanoi University public administration service".into()
}
fn default_faqs() -> Vec<String> {
    vec![
        "How to register for dormitory?".into(),
        "How much does one credit in IT department cost?".into(),
        "How to pay tuition fees?".into(),
    ]
}

impl AppConfig {
    /// Load configuration from the default path (~/.hanuchat/config.toml).
    ///
    /// Environment variables take highest priority:
    /// - `HANUCHAT_RETRIEVAL_URL`
    /// - `HANUCHAT_COMPLETION_URL`
    /// - `HANUCHAT_TOPIC`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(url) = std::env::var("HANUCHAT_RETRIEVAL_URL") {
            config.retrieval_url = url;
        }
        if let Ok(url) = std::env::var("HANUCHAT_COMPLETION_URL") {
            config.completion_url = url;
        }
        if let Ok(topic) = std::env::var("HANUCHAT_TOPIC") {
            config.topic = topic;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".hanuchat")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ValidationError(
                "window_size must be at least 1".into(),
            ));
        }

        if self.retrieval_url.trim().is_empty() || self.completion_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "retrieval_url and completion_url must be set".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            retrieval_url: default_retrieval_url(),
            completion_url: default_completion_url(),
            topic: default_topic(),
            window_size: default_window_size(),
            greeting: default_greeting(),
            faqs: default_faqs(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.topic, "services");
        assert_eq!(config.window_size, 5);
        assert!(config.retrieval_url.contains("hanu-chatbot"));
        assert_eq!(config.faqs.len(), 3);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.greeting, config.greeting);
        assert_eq!(parsed.window_size, config.window_size);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.topic, "services");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "topic = \"admissions\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.topic, "admissions");
        assert_eq!(config.window_size, 5);
    }

    #[test]
    fn zero_window_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "window_size = 0\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn default_toml_parses_back() {
        let parsed: AppConfig = toml::from_str(&AppConfig::default_toml()).unwrap();
        assert_eq!(parsed.topic, "services");
    }
}
