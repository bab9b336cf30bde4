//! Configuration management for the Noor gateway
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with NOOR_ prefix
//!
//! The Gemini key can also be supplied through the conventional
//! `GEMINI_API_KEY` variable.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Outbound HTTP client configuration
    pub http: HttpConfig,

    /// Prayer timings provider configuration
    pub timings: TimingsConfig,

    /// Gemini text-generation configuration
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Request timeout applied by the outbound client, in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimingsConfig {
    /// AlAdhan API base URL
    pub base_url: String,

    /// Calculation method used when the caller does not pick one
    pub default_method: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key; the LLM endpoints fail with a configuration error without it
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier, e.g. gemini-2.5-flash
    pub model: String,

    /// Generative Language API base URL
    pub base_url: String,
}

impl GeminiConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("NOOR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("http.timeout_secs", 30)?
            .set_default("timings.base_url", "https://api.aladhan.com/v1")?
            .set_default("timings.default_method", 2)?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (NOOR_ prefix)
            .add_source(
                Environment::with_prefix("NOOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut loaded: Config = config.try_deserialize()?;

        if !loaded.gemini.has_api_key() {
            loaded.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        Ok(loaded)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
