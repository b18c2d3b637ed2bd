//! Review module
//!
//! Language catalogue and prompt construction shared by the proxy, the
//! smoke binary and the editor client.

pub mod language;
pub mod prompt;

pub use language::{Language, UnsupportedLanguage};
pub use prompt::{build_prompt, PromptError, ReviewAction, ReviewRequest};
