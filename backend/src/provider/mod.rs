//! Provider module
//!
//! Talks to the external generative-AI API and narrows its loosely-typed
//! responses down to a single display string.

pub mod api_client;
pub mod gemini_types;

pub use api_client::{valid_model_id, ContentGenerator, GeminiClient};
pub use gemini_types::ProviderResponse;
