//! Gemini API client
//!
//! Direct HTTP client for calling the Gemini `generateContent` endpoint.
//! Exactly one request per call: no retry, no timeout beyond the transport
//! default, no streaming.

use crate::config::GenAiConfig;
use crate::provider::gemini_types::GeminiApiRequest;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde_json::Value;

/// Whether `model` is safe to splice into the request path
///
/// Only `[A-Za-z0-9._-]` is accepted, and `.`/`..` alone are rejected, so a
/// model id can never climb out of `/models/` or start a query string.
pub fn valid_model_id(model: &str) -> bool {
    !model.is_empty()
        && model != "."
        && model != ".."
        && model
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

/// Something that can turn a prompt into a raw provider response
///
/// The proxy handler only depends on this trait, which lets tests observe
/// whether an upstream call happened at all.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Issue one generation call and return the undecoded JSON body
    async fn generate_content(&self, api_key: &str, model: &str, prompt: &str)
        -> anyhow::Result<Value>;
}

/// Gemini REST client sharing one pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client against `base_url`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client from provider configuration
    pub fn from_config(client: reqwest::Client, config: &GenAiConfig) -> Self {
        Self::new(client, config.api_base_url.clone())
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> anyhow::Result<Value> {
        if api_key.is_empty() {
            return Err(anyhow!("API key is empty"));
        }
        if !valid_model_id(model) {
            return Err(anyhow!("Invalid model id: {:?}", model));
        }

        let url = self.endpoint(model);
        let request_body = GeminiApiRequest::from_prompt(prompt);

        tracing::debug!(
            url = %url,
            model = %model,
            prompt_len = prompt.len(),
            "Calling Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .context("Failed to send HTTP request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Gemini API returned error status"
            );

            if status_code == 429 {
                return Err(anyhow!(
                    "Gemini API rate limit exceeded (HTTP {}): {}",
                    status_code,
                    error_body
                ));
            }

            return Err(anyhow!(
                "Gemini API returned error status {}: {}",
                status_code,
                error_body
            ));
        }

        let response_body = response
            .text()
            .await
            .context("Failed to read response body from Gemini API")?;

        let parsed: Value = serde_json::from_str(&response_body).map_err(|e| {
            anyhow!(
                "Failed to parse JSON response from Gemini API: {} - Response body: {}",
                e,
                response_body
            )
        })?;

        tracing::debug!(
            response_len = response_body.len(),
            "Received response from Gemini API"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_api_key_rejected_before_request() {
        let client = GeminiClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let result = client
            .generate_content("", "gemini-2.5-flash", "test prompt")
            .await;
        assert!(result.unwrap_err().to_string().contains("API key is empty"));
    }

    #[test]
    fn test_valid_model_id() {
        for ok in ["gemini-2.5-flash", "gemini-2.5-pro", "models_v1.0", "A-b_C.9"] {
            assert!(valid_model_id(ok), "{}", ok);
        }
        for bad in [
            "",
            ".",
            "..",
            "../../admin?",
            "gemini/2.5",
            "gemini?x=1",
            "gemini#frag",
            "gemini 2.5",
            "gemini%2F..",
            "gemini:generateContent",
        ] {
            assert!(!valid_model_id(bad), "{}", bad);
        }
    }

    #[tokio::test]
    async fn test_path_escaping_model_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"text": "admin"}"#)
            .expect(0)
            .create_async()
            .await;

        let client = GeminiClient::new(reqwest::Client::new(), server.url());
        let err = client
            .generate_content("k", "../../admin?", "p")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(err.to_string().contains("Invalid model id"));
    }

    #[tokio::test]
    async fn test_generate_content_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "contents": [{ "parts": [{ "text": "test prompt" }] }]
            })))
            .with_status(200)
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [{ "text": "This is a test response" }],
                            "role": "model"
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(reqwest::Client::new(), server.url());
        let value = client
            .generate_content("test-key", "gemini-2.5-flash", "test prompt")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            value.pointer("/candidates/0/content/parts/0/text"),
            Some(&json!("This is a test response"))
        );
    }

    #[tokio::test]
    async fn test_model_is_part_of_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-pro:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"text": "ok"}"#)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let client = GeminiClient::new(reqwest::Client::new(), base);
        let value = client
            .generate_content("k", "gemini-2.5-pro", "p")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value, json!({ "text": "ok" }));
    }

    #[tokio::test]
    async fn test_rate_limit_is_an_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": "Rate limit exceeded"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = GeminiClient::new(reqwest::Client::new(), server.url());
        let err = client
            .generate_content("k", "gemini-2.5-flash", "p")
            .await
            .unwrap_err();

        mock.assert_async().await;
        let message = err.to_string();
        assert!(message.contains("rate limit") && message.contains("429"));
    }

    #[tokio::test]
    async fn test_error_status_includes_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(reqwest::Client::new(), server.url());
        let err = client
            .generate_content("bad", "gemini-2.5-flash", "p")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let client = GeminiClient::new(reqwest::Client::new(), server.url());
        let err = client
            .generate_content("k", "gemini-2.5-flash", "p")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
