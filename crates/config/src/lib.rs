//! Configuration loading and validation for the carcare assistant.
//!
//! Loads configuration from `~/.carcare/config.toml` with environment
//! variable overrides. API keys come from the environment (`GROQ_API_KEY`,
//! `NVIDIA_API_KEY`), falling back to a local `.env` file when present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// The root configuration structure.
///
/// Maps directly to `~/.carcare/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the chat LLM provider (Groq)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_api_key: Option<String>,

    /// API key for the embedding provider (NVIDIA)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_api_key: Option<String>,

    /// Chat model
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Embedding model
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Default temperature for chat completions
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Default max tokens per LLM response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Agent loop configuration
    #[serde(default)]
    pub agent: AgentConfig,
}

fn default_chat_model() -> String {
    "llama3-70b-8192".into()
}
fn default_embedding_model() -> String {
    "nvidia/nv-embedqa-e5-v5".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    4096
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("chat_api_key", &redact(&self.chat_api_key))
            .field("embedding_api_key", &redact(&self.embedding_api_key))
            .field("chat_model", &self.chat_model)
            .field("embedding_model", &self.embedding_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("catalog", &self.catalog)
            .field("agent", &self.agent)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_api_key: None,
            embedding_api_key: None,
            chat_model: default_chat_model(),
            embedding_model: default_embedding_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            catalog: CatalogConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

/// Catalog loading and retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the six catalog JSON files
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,

    /// How many documents each retrieval returns
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Snippet length in characters for rendered tool output
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_top_k() -> usize {
    5
}
fn default_snippet_chars() -> usize {
    200
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
            top_k: default_top_k(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

/// Agent loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum tool call iterations per turn
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_max_iterations() -> u32 {
    10
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.carcare/config.toml).
    ///
    /// API keys are resolved in order: config file, process environment,
    /// `.env` file in the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        // Populate the process environment from .env if present. Existing
        // variables always win.
        let _ = dotenvy::dotenv();

        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.chat_api_key.is_none() {
            config.chat_api_key = std::env::var("GROQ_API_KEY")
                .ok()
                .or_else(|| std::env::var("CARCARE_CHAT_API_KEY").ok());
        }

        if config.embedding_api_key.is_none() {
            config.embedding_api_key = std::env::var("NVIDIA_API_KEY")
                .ok()
                .or_else(|| std::env::var("CARCARE_EMBEDDING_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("CARCARE_CHAT_MODEL") {
            config.chat_model = model;
        }

        if let Ok(model) = std::env::var("CARCARE_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }

        if let Ok(dir) = std::env::var("CARCARE_CATALOG_DIR") {
            config.catalog.dir = PathBuf::from(dir);
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
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".carcare")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.temperature < 0.0 || self.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.catalog.top_k == 0 {
            return Err(ConfigError::ValidationError(
                "catalog.top_k must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Check whether both API keys are present.
    pub fn has_api_keys(&self) -> bool {
        self.chat_api_key.is_some() && self.embedding_api_key.is_some()
    }
}
