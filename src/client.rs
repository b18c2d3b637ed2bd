// Proxy client
// Posts prompts to the review proxy on a background thread

use crate::state::{Outcome, RequestId};
use code_review_backend::api::genai::GenAiRequest;
use code_review_backend::review::ReviewAction;
use serde_json::Value;
use std::sync::mpsc;
use std::thread;

/// Default proxy endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/genai";

/// Finished request delivered back to the UI thread
#[derive(Debug)]
pub struct Completion {
    /// Request identifier
    pub id: RequestId,
    /// What came back
    pub outcome: Outcome,
}

/// Proxy endpoint from `CODE_REVIEW_API_URL`, or the local default
pub fn endpoint_from_env() -> String {
    std::env::var("CODE_REVIEW_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

/// Send one request and wait for the JSON body
///
/// Any JSON body counts, whatever the status: the proxy's error payloads are
/// shown to the user as-is.
pub fn post_prompt(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    request: &GenAiRequest,
) -> Result<Value, reqwest::Error> {
    client.post(endpoint).json(request).send()?.json::<Value>()
}

/// Fire a request on its own thread and report through `tx`
///
/// Nothing cancels the thread; it runs until the request ends.
pub fn spawn_request(
    client: reqwest::blocking::Client,
    endpoint: String,
    id: RequestId,
    action: ReviewAction,
    request: GenAiRequest,
    tx: mpsc::Sender<Completion>,
) {
    thread::spawn(move || {
        let outcome = match post_prompt(&client, &endpoint, &request) {
            Ok(body) => Outcome::Body(body),
            Err(e) => {
                tracing::error!(id, action = %action, error = %e, "Request to proxy failed");
                Outcome::TransportFailed(action)
            }
        };
        // Receiver is gone only when the window closed
        let _ = tx.send(Completion { id, outcome });
    });
}
