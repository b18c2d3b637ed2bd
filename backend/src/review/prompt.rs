//! Prompt construction
//!
//! Turns a snippet, its declared language and the requested action into the
//! single instruction string sent to the model. Pure string building.

use crate::config::DEFAULT_MODEL;
use crate::review::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What the user asked the model to do with the snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    /// Rate the code and explain problems
    Review,
    /// Return corrected code only
    Fix,
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewAction::Review => f.write_str("review"),
            ReviewAction::Fix => f.write_str("fix"),
        }
    }
}

/// Quality ratings the review prompt asks the model to choose from
pub const QUALITY_RATINGS: [&str; 4] = ["Better", "Good", "Normal", "Bad"];

/// Errors raised while assembling a review request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Source code was empty or whitespace only
    #[error("Please enter your code")]
    EmptySource,
}

/// One user action, built fresh per click and never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Code exactly as typed in the editor
    pub source_code: String,
    /// Declared language of the code
    pub language: Language,
    /// Review or fix
    pub action: ReviewAction,
    /// Model identifier forwarded to the provider
    pub model_id: String,
}

impl ReviewRequest {
    /// Create a request with the default model
    ///
    /// # Errors
    /// * `PromptError::EmptySource` if the code is blank
    pub fn new(
        source_code: impl Into<String>,
        language: Language,
        action: ReviewAction,
    ) -> Result<Self, PromptError> {
        let source_code = source_code.into();
        if source_code.trim().is_empty() {
            return Err(PromptError::EmptySource);
        }
        Ok(Self {
            source_code,
            language,
            action,
            model_id: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the model identifier
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Render the prompt for this request
    pub fn prompt(&self) -> String {
        build_prompt(self.action, self.language, &self.source_code)
    }
}

/// Build the instruction string for `action`
///
/// The code is embedded verbatim in a fence labelled with the language tag.
pub fn build_prompt(action: ReviewAction, language: Language, source_code: &str) -> String {
    let tag = language.tag();
    let instructions = match action {
        ReviewAction::Review => format!(
            "You are an expert-level {tag} developer.\n\
             \n\
             Review the following code and provide:\n\
             1. Quality rating ({ratings})\n\
             2. Detailed explanation\n\
             3. Best practices & improvements\n\
             4. Potential bugs\n\
             5. Syntax/runtime errors\n\
             6. Corrected version if needed.\n",
            ratings = QUALITY_RATINGS.join(" / "),
        ),
        ReviewAction::Fix => format!(
            "You are an expert {tag} developer.\n\
             \n\
             Fix this code by:\n\
             - Correcting errors\n\
             - Improving structure\n\
             - Keeping same logic unless incorrect\n\
             - Returning ONLY the fixed code inside a code block.\n"
        ),
    };

    format!("{instructions}\n```{tag}\n{source_code}\n```\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_contents() {
        let prompt = build_prompt(ReviewAction::Review, Language::Python, "print(1)");
        assert!(prompt.starts_with("You are an expert-level python developer."));
        assert!(prompt.contains("Quality rating (Better / Good / Normal / Bad)"));
        assert!(prompt.contains("Potential bugs"));
        assert!(prompt.contains("Syntax/runtime errors"));
        assert!(prompt.contains("Corrected version if needed."));
        assert!(prompt.contains("```python\nprint(1)\n```"));
    }

    #[test]
    fn test_fix_prompt_contents() {
        let prompt = build_prompt(ReviewAction::Fix, Language::Go, "func main() {");
        assert!(prompt.starts_with("You are an expert go developer."));
        assert!(prompt.contains("Keeping same logic unless incorrect"));
        assert!(prompt.contains("Returning ONLY the fixed code"));
        assert!(!prompt.contains("Quality rating"));
        assert!(prompt.contains("```go\nfunc main() {\n```"));
    }

    #[test]
    fn test_source_embedded_verbatim_for_every_language() {
        let source = "  let x = `tick`;\n\tfoo(\"bar\") // ünïcode\n";
        for lang in Language::ALL {
            for action in [ReviewAction::Review, ReviewAction::Fix] {
                let prompt = build_prompt(action, lang, source);
                assert!(prompt.contains(source), "{lang} {action}");
                assert!(prompt.contains(&format!("```{}\n", lang.tag())));
            }
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt(ReviewAction::Review, Language::Sql, "SELECT 1;");
        let b = build_prompt(ReviewAction::Review, Language::Sql, "SELECT 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn test_request_rejects_blank_source() {
        assert_eq!(
            ReviewRequest::new("   \n\t", Language::Java, ReviewAction::Review),
            Err(PromptError::EmptySource)
        );
        assert_eq!(
            ReviewRequest::new("", Language::Java, ReviewAction::Fix),
            Err(PromptError::EmptySource)
        );
    }

    #[test]
    fn test_request_defaults_and_model_override() {
        let request = ReviewRequest::new("x = 1", Language::Python, ReviewAction::Fix).unwrap();
        assert_eq!(request.model_id, "gemini-2.5-flash");
        assert_eq!(request.prompt(), build_prompt(ReviewAction::Fix, Language::Python, "x = 1"));

        let request = request.with_model("gemini-2.5-pro");
        assert_eq!(request.model_id, "gemini-2.5-pro");
    }
}
