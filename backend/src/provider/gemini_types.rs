//! Gemini API wire types
//!
//! Request structs serialized for `generateContent`, and the tagged union the
//! untyped response is narrowed into. The response shape has varied across
//! API and SDK versions, so it is parsed from a raw `serde_json::Value`
//! rather than deserialized into a fixed struct.

use serde::Serialize;
use serde_json::Value;

/// Request structure for Gemini API
#[derive(Serialize, Debug)]
pub struct GeminiApiRequest {
    /// List of content items to send
    pub contents: Vec<RequestContent>,
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single part for requests (typically text)
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

impl GeminiApiRequest {
    /// Wrap a prompt as a single-part user content
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// A provider response narrowed to one of the known shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// Top-level `text` field
    DirectText(String),
    /// First non-empty text part of the first candidate's content
    CandidateText(String),
    /// No text could be located; keeps the raw payload
    Unrecognized(Value),
}

impl ProviderResponse {
    /// Try each known shape in order and fall back to `Unrecognized`
    pub fn parse(raw: Value) -> Self {
        if let Some(text) = direct_text(&raw) {
            return ProviderResponse::DirectText(text.to_string());
        }
        if let Some(text) = candidate_text(&raw) {
            return ProviderResponse::CandidateText(text.to_string());
        }
        ProviderResponse::Unrecognized(raw)
    }

    /// Collapse to the string shown to the user
    ///
    /// Never empty: unrecognized payloads render as pretty-printed JSON.
    pub fn into_display_text(self) -> String {
        match self {
            ProviderResponse::DirectText(text) | ProviderResponse::CandidateText(text) => text,
            ProviderResponse::Unrecognized(raw) => {
                serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string())
            }
        }
    }
}

fn direct_text(raw: &Value) -> Option<&str> {
    raw.get("text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn candidate_text(raw: &Value) -> Option<&str> {
    raw.pointer("/candidates/0/content/parts")?
        .as_array()?
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = GeminiApiRequest::from_prompt("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "contents": [{ "parts": [{ "text": "hello" }] }] }));
    }

    #[test]
    fn test_parse_direct_text() {
        let parsed = ProviderResponse::parse(json!({ "text": "Good" }));
        assert_eq!(parsed, ProviderResponse::DirectText("Good".to_string()));
    }

    #[test]
    fn test_direct_text_preferred_over_candidates() {
        let parsed = ProviderResponse::parse(json!({
            "text": "top",
            "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }]
        }));
        assert_eq!(parsed.into_display_text(), "top");
    }

    #[test]
    fn test_parse_nested_candidate_only() {
        let parsed = ProviderResponse::parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "nested answer" }], "role": "model" },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(parsed, ProviderResponse::CandidateText("nested answer".to_string()));
    }

    #[test]
    fn test_empty_direct_text_falls_through() {
        let parsed = ProviderResponse::parse(json!({
            "text": "",
            "candidates": [{ "content": { "parts": [{ "text": "" }, { "text": "second" }] } }]
        }));
        assert_eq!(parsed, ProviderResponse::CandidateText("second".to_string()));
    }

    #[test]
    fn test_non_string_text_is_not_direct() {
        let raw = json!({ "text": 42 });
        let parsed = ProviderResponse::parse(raw.clone());
        assert_eq!(parsed, ProviderResponse::Unrecognized(raw));
    }

    #[test]
    fn test_unrecognized_renders_pretty_json() {
        let raw = json!({ "candidates": [], "promptFeedback": { "blockReason": "SAFETY" } });
        let text = ProviderResponse::parse(raw.clone()).into_display_text();
        assert!(!text.is_empty());
        assert_eq!(text, serde_json::to_string_pretty(&raw).unwrap());
        assert!(text.contains("blockReason"));
    }

    #[test]
    fn test_null_response_is_never_empty() {
        let text = ProviderResponse::parse(Value::Null).into_display_text();
        assert_eq!(text, "null");
    }
}
