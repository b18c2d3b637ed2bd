//! GenAI proxy endpoint
//!
//! `/api/genai` forwards a prompt to the provider so the API key never leaves
//! the server. Checks run in a fixed order (method, body size, prompt,
//! credential, model id) and only then is the single upstream call made.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::provider::{valid_model_id, ProviderResponse};
use crate::state::SharedState;

/// Proxy request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenAiRequest {
    /// Full prompt, code included
    #[serde(default)]
    pub prompt: String,
    /// Optional model name (e.g., "gemini-2.5-flash", "gemini-2.5-pro")
    /// If not provided, uses the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Proxy success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenAiResponse {
    /// Normalized model output
    pub text: String,
}

/// Parse and validate the request body
///
/// An unparseable body and a blank prompt are the same failure. A `prompt`
/// that is present but not a string (`42`, `true`, an object) fails to
/// deserialize and is therefore also reported as missing, even when it would
/// be "truthy".
pub fn parse_request(body: &[u8]) -> Result<GenAiRequest, AppError> {
    let request: GenAiRequest =
        serde_json::from_slice(body).map_err(|_| AppError::MissingPrompt)?;
    if request.prompt.trim().is_empty() {
        return Err(AppError::MissingPrompt);
    }
    Ok(request)
}

/// ANY /api/genai - Forward a prompt to the provider
///
/// This endpoint:
/// 1. Rejects anything but POST
/// 2. Rejects a body over the route's size limit
/// 3. Rejects a missing or blank prompt
/// 4. Reads the credential from the environment
/// 5. Rejects a model id that is not a plain path segment
/// 6. Calls the provider once
/// 7. Returns the normalized text
///
/// The body is taken as a `Result` so that the limit enforced by
/// `DefaultBodyLimit` surfaces as a JSON error after the method check,
/// instead of axum's plain-text rejection.
pub async fn generate(
    State(state): State<SharedState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenAiResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let body = body.map_err(|rejection| {
        warn!(status = %rejection.status(), error = %rejection, "Request body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::MissingPrompt
        }
    })?;

    let request = parse_request(&body)?;

    let api_key = state.genai.api_key().ok_or_else(|| {
        error!(
            env_var = %state.genai.api_key_env,
            "Provider API key is not set"
        );
        AppError::ApiKeyNotConfigured
    })?;

    let model = state.genai.resolve_model(request.model.as_deref());
    if !valid_model_id(model) {
        warn!(model = %model, "Rejected model id");
        return Err(AppError::InvalidModel);
    }
    info!(
        model = %model,
        prompt_len = request.prompt.len(),
        "GenAI request received"
    );

    let raw = state
        .generator
        .generate_content(&api_key, model, &request.prompt)
        .await
        .map_err(|e| {
            error!(model = %model, error = %e, "Upstream generation failed");
            AppError::Upstream(e)
        })?;

    let parsed = ProviderResponse::parse(raw);
    if let ProviderResponse::Unrecognized(_) = parsed {
        warn!(model = %model, "No text in provider response, returning raw JSON");
    }
    let text = parsed.into_display_text();

    info!(model = %model, response_len = text.len(), "GenAI response ready");

    Ok(Json(GenAiResponse { text }))
}
