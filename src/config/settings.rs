//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::utils::logging::mask_secret;
use anyhow::{Context, Result};
use std::fmt;

/// Default OpenRouter API base URL
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

/// Default prompt sent as the single user message
pub const DEFAULT_PROMPT: &str = "What is the meaning of life?";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenRouter API configuration
    pub openrouter: OpenRouterConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// OpenRouter API configuration
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// Bearer credential
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Content of the user message
    pub prompt: String,
    /// Request timeout in seconds, client default when unset
    pub timeout: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenRouterConfig {
    /// Full chat completion endpoint URL
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout = match lookup("OPENROUTER_TIMEOUT") {
            Some(raw) => Some(raw.trim().parse::<u64>().context("Invalid timeout value")?),
            None => None,
        };

        let settings = Self {
            openrouter: OpenRouterConfig {
                api_key: lookup("OPENROUTER_API_KEY")
                    .context("OPENROUTER_API_KEY environment variable not set")?,
                base_url: get_or_default("OPENROUTER_BASE_URL", DEFAULT_BASE_URL),
                model: get_or_default("OPENROUTER_MODEL", DEFAULT_MODEL),
                prompt: get_or_default("OPENROUTER_PROMPT", DEFAULT_PROMPT),
                timeout,
            },
            logging: LoggingConfig {
                level: get_or_default("RUST_LOG", "warn"),
                format: get_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.openrouter.api_key.is_empty() {
            anyhow::bail!("OpenRouter API key cannot be empty");
        }

        if self.openrouter.api_key.contains(char::is_whitespace) {
            anyhow::bail!("OpenRouter API key cannot contain whitespace characters");
        }

        if !self.openrouter.base_url.starts_with("http") {
            anyhow::bail!("Invalid OpenRouter base URL format, should start with 'http'");
        }

        if self.openrouter.model.trim().is_empty() {
            anyhow::bail!("Model identifier cannot be empty");
        }

        if self.openrouter.timeout == Some(0) {
            anyhow::bail!("Timeout value cannot be 0");
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}
