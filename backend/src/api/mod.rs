//! API module
//!
//! Contains HTTP request handlers and the route table

pub mod genai;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};

use crate::state::SharedState;

/// Build the route table
///
/// `/api/genai` accepts every method so that non-POST requests get the JSON
/// 405 payload instead of axum's empty default. Its body limit comes from
/// `GenAiConfig::max_body_bytes`; the handler reports an oversized body as
/// JSON.
pub fn router(state: SharedState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.genai.max_body_bytes);
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/genai", any(genai::generate).layer(body_limit))
        .with_state(state)
}
