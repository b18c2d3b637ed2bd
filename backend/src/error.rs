//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` so every failure leaves the proxy as a
//! JSON payload with a status code; nothing propagates uncaught.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant maps to one fixed HTTP status and error message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request used a verb other than POST
    #[error("Only POST allowed")]
    MethodNotAllowed,

    /// Request body has no usable prompt
    #[error("Missing prompt")]
    MissingPrompt,

    /// Request body exceeds the configured size limit
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Requested model id contains characters outside `[A-Za-z0-9._-]`
    #[error("Invalid model")]
    InvalidModel,

    /// Provider credential is absent from the environment
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    /// The upstream provider call failed (transport, status or decoding)
    #[error("Server error")]
    Upstream(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidModel => StatusCode::BAD_REQUEST,
            AppError::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Upstream(cause) => json!({
                "error": self.to_string(),
                "details": format!("{:#}", cause),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_method_not_allowed_payload() {
        let (status, body) = render(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Only POST allowed" }));
    }

    #[tokio::test]
    async fn test_missing_prompt_payload() {
        let (status, body) = render(AppError::MissingPrompt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing prompt" }));
    }

    #[tokio::test]
    async fn test_payload_too_large_payload() {
        let (status, body) = render(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({ "error": "Payload too large" }));
    }

    #[tokio::test]
    async fn test_invalid_model_payload() {
        let (status, body) = render(AppError::InvalidModel).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid model" }));
    }

    #[tokio::test]
    async fn test_api_key_payload_has_no_details() {
        let (status, body) = render(AppError::ApiKeyNotConfigured).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "API key not configured" }));
    }

    #[tokio::test]
    async fn test_upstream_payload_carries_cause() {
        let err = AppError::from(anyhow!("connection refused"));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
        assert_eq!(body["details"], "connection refused");
    }
}
