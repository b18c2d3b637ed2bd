// Application state shared by all request handlers
// Immutable after startup: provider configuration plus the upstream client

use crate::config::GenAiConfig;
use crate::provider::{ContentGenerator, GeminiClient};
use std::fmt;
use std::sync::Arc;

/// Router state handle
pub type SharedState = Arc<AppState>;

/// Main application state
///
/// Holds nothing mutable. Each request reads the credential from the
/// environment itself, so the proxy keeps no per-request state between calls.
pub struct AppState {
    /// Provider configuration (credential variable, base URL, default model)
    pub genai: GenAiConfig,
    /// Upstream generator (Gemini in production, a stub in tests)
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Create state backed by the Gemini REST client
    pub fn new(genai: GenAiConfig) -> Self {
        let generator = GeminiClient::from_config(reqwest::Client::new(), &genai);
        Self::with_generator(genai, Arc::new(generator))
    }

    /// Create state with an explicit generator
    pub fn with_generator(genai: GenAiConfig, generator: Arc<dyn ContentGenerator>) -> Self {
        Self { genai, generator }
    }

    /// Wrap into the router state handle
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("genai", &self.genai)
            .finish_non_exhaustive()
    }
}
