//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Default model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the provider credential, unless overridden
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Largest `/api/genai` body accepted by default (10 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Generative-AI provider configuration
    pub genai: GenAiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Generative-AI provider configuration
///
/// The credential itself is never stored here. Only the name of the
/// environment variable is kept, and the value is looked up per request.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Provider API base URL
    pub api_base_url: String,
    /// Model used when the request omits one
    pub default_model: String,
    /// Request body size limit for the proxy route
    pub max_body_bytes: usize,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GenAiConfig {
    /// Read the provider credential from the process environment
    ///
    /// Returns `None` when the variable is unset or empty.
    pub fn api_key(&self) -> Option<String> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Resolve the model for a request, falling back to the default
    pub fn resolve_model<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.default_model.as_str())
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            genai: GenAiConfig {
                api_key_env: env::var("GENAI_API_KEY_ENV")
                    .unwrap_or_else(|_| DEFAULT_API_KEY_ENV.to_string()),
                api_base_url: env::var("GENAI_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                default_model: env::var("GENAI_MODEL")
                    .ok()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                max_body_bytes: env::var("GENAI_MAX_BODY_BYTES")
                    .ok()
                    .and_then(|b| b.parse().ok())
                    .filter(|b| *b > 0)
                    .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
