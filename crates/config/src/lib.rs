//! Configuration loading and validation for SpeechIntent.
//!
//! Loads configuration from `~/.speechintent/config.toml` (or the file named
//! by `SPEECHINTENT_CONFIG`) with environment variable overrides. `PORT`
//! alone is enough to run the relay; every other setting has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.speechintent/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// How many completed exchanges are replayed to the model
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Listener configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Upstream model configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

fn default_history_window() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    10000
}
fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the generative-language API, without the `/models/...` suffix
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on a single upstream call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}
fn default_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_timeout_secs() -> u64 {
    120
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path, then apply environment
    /// overrides:
    /// - `SPEECHINTENT_CONFIG` — config file path
    /// - `PORT` — listening port
    /// - `SPEECHINTENT_HOST` — bind address
    /// - `SPEECHINTENT_MODEL` — upstream model
    /// - `SPEECHINTENT_API_URL` — upstream base URL
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("SPEECHINTENT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("config.toml"));
        let mut config = Self::load_from(&config_path)?;

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
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

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.gateway.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PORT must be a port number, got '{port}'"))
            })?;
        }

        if let Some(host) = lookup("SPEECHINTENT_HOST") {
            self.gateway.host = host;
        }

        if let Some(model) = lookup("SPEECHINTENT_MODEL") {
            self.upstream.model = model;
        }

        if let Some(url) = lookup("SPEECHINTENT_API_URL") {
            self.upstream.api_url = url;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".speechintent")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_window == 0 {
            return Err(ConfigError::ValidationError(
                "history_window must be at least 1".into(),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "upstream.timeout_secs must be at least 1".into(),
            ));
        }

        if self.upstream.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "upstream.model must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Render the configuration as TOML (for the `config` command).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        Self::default().to_toml()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            gateway: GatewayConfig::default(),
            upstream: UpstreamConfig::default(),
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
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.port, 10000);
        assert_eq!(config.gateway.host, "0.0.0.0");
        assert_eq!(config.upstream.model, "gemini-2.5-flash");
        assert_eq!(config.history_window, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = config.to_toml();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.gateway.port, config.gateway.port);
        assert_eq!(parsed.upstream.api_url, config.upstream.api_url);
    }

    #[test]
    fn port_env_overrides_default() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn unset_env_keeps_defaults() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[])).unwrap();
        assert_eq!(config.gateway.port, 10000);
        assert_eq!(config.upstream.model, "gemini-2.5-flash");
    }

    #[test]
    fn invalid_port_env_rejected() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn model_and_url_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                ("SPEECHINTENT_MODEL", "gemini-2.0-flash"),
                ("SPEECHINTENT_API_URL", "http://127.0.0.1:9999"),
                ("SPEECHINTENT_HOST", "127.0.0.1"),
            ]))
            .unwrap();
        assert_eq!(config.upstream.model, "gemini-2.0-flash");
        assert_eq!(config.upstream.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn zero_history_window_rejected() {
        let config = AppConfig {
            history_window: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().gateway.port, 10000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[upstream]
model = "gemini-2.5-pro"
timeout_secs = 30
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.upstream.model, "gemini-2.5-pro");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.gateway.port, 10000);
        assert_eq!(config.history_window, 1);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_window = \"one\"").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("gemini-2.5-flash"));
        assert!(toml_str.contains("10000"));
    }
}
