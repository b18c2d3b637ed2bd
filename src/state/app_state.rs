// Application state management
// Editor inputs, theme, and the response panel reducer

use code_review_backend::api::genai::GenAiRequest;
use code_review_backend::review::{Language, ReviewAction, ReviewRequest};
use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

/// Initial editor contents
pub const PLACEHOLDER_CODE: &str = "// Write your code here";

/// Identifier handed out per submission, increasing
pub type RequestId = u64;

/// Window colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark background
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Why a click did not produce a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Editor is blank
    #[error("Please enter your code")]
    EmptyCode,
    /// No language picked yet
    #[error("Please select a language first!")]
    NoLanguage,
}

/// How a request ended, as seen by the client
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The proxy answered with a JSON body (success or error payload)
    Body(Value),
    /// The request never produced a JSON body
    TransportFailed(ReviewAction),
}

impl Outcome {
    /// Text shown in the response panel
    ///
    /// A non-empty `text` field wins; any other body is shown as
    /// pretty-printed JSON so proxy error payloads stay visible.
    pub fn display_text(&self) -> String {
        match self {
            Outcome::Body(body) => match body.get("text").and_then(Value::as_str) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()),
            },
            Outcome::TransportFailed(ReviewAction::Review) => {
                "❌ Error while reviewing code.".to_string()
            }
            Outcome::TransportFailed(ReviewAction::Fix) => {
                "❌ Error while fixing code.".to_string()
            }
        }
    }
}

/// Events the response panel reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEvent {
    /// A request was dispatched
    Submitted {
        /// Request identifier
        id: RequestId,
    },
    /// A request finished
    Completed {
        /// Request identifier
        id: RequestId,
        /// What came back
        outcome: Outcome,
    },
}

/// Response panel state
///
/// Only ever changed through [`ResultState::apply`]. The displayed text is
/// replaced by whichever completion is applied last, whatever order the
/// requests were submitted in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultState {
    text: String,
    in_flight: BTreeSet<RequestId>,
    last_applied: Option<RequestId>,
}

impl ResultState {
    /// Fold one event into the state
    pub fn apply(&mut self, event: ResultEvent) {
        match event {
            ResultEvent::Submitted { id } => {
                self.text.clear();
                self.in_flight.insert(id);
            }
            ResultEvent::Completed { id, outcome } => {
                self.in_flight.remove(&id);
                self.text = outcome.display_text();
                self.last_applied = Some(id);
            }
        }
    }

    /// Text currently displayed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any submitted request is still outstanding
    pub fn loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Request whose outcome is on screen
    pub fn last_applied(&self) -> Option<RequestId> {
        self.last_applied
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Editor contents
    pub code: String,
    /// Selected language, if any
    pub language: Option<Language>,
    /// Model forwarded with every request
    pub model_id: String,
    /// Current theme
    pub theme: Theme,
    /// Validation message from the last click
    pub notice: Option<String>,
    result: ResultState,
    next_id: RequestId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            code: PLACEHOLDER_CODE.to_string(),
            language: None,
            model_id: code_review_backend::config::DEFAULT_MODEL.to_string(),
            theme: Theme::Dark,
            notice: None,
            result: ResultState::default(),
            next_id: 1,
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between dark and light
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Response panel state
    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Validate the editor inputs for `action`
    pub fn prepare(&self, action: ReviewAction) -> Result<ReviewRequest, InputError> {
        if self.code.trim().is_empty() {
            return Err(InputError::EmptyCode);
        }
        let language = self.language.ok_or(InputError::NoLanguage)?;
        ReviewRequest::new(self.code.clone(), language, action)
            .map(|request| request.with_model(self.model_id.clone()))
            .map_err(|_| InputError::EmptyCode)
    }

    /// Handle a Review / Fix click
    ///
    /// Returns the id and body to send, or `None` after recording a notice.
    pub fn submit(&mut self, action: ReviewAction) -> Option<(RequestId, GenAiRequest)> {
        let request = match self.prepare(action) {
            Ok(request) => request,
            Err(e) => {
                self.notice = Some(e.to_string());
                return None;
            }
        };
        self.notice = None;

        let id = self.next_id;
        self.next_id += 1;
        self.result.apply(ResultEvent::Submitted { id });

        Some((
            id,
            GenAiRequest {
                prompt: request.prompt(),
                model: Some(request.model_id),
            },
        ))
    }

    /// Record a finished request
    pub fn complete(&mut self, id: RequestId, outcome: Outcome) {
        self.result.apply(ResultEvent::Completed { id, outcome });
    }
}
