// Code Review GUI - Main Entry Point
// Native editor that sends code to the review proxy and shows the answer

mod client;
mod state;
mod ui;

use eframe::egui;
use state::{AppState, Theme};
use std::sync::mpsc;
use ui::{render_app_layout, visuals_for};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Code Review Assistant")
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Code Review Assistant",
        options,
        Box::new(|_cc| Box::new(CodeReviewApp::new(client::endpoint_from_env()))),
    )
}

/// Main application struct
/// Owns editor state and the channel background requests report on
struct CodeReviewApp {
    /// Editor inputs, theme, response panel
    state: AppState,
    /// Proxy endpoint URL
    endpoint: String,
    /// Shared blocking HTTP client
    http: reqwest::blocking::Client,
    /// Theme last pushed to egui
    applied_theme: Option<Theme>,
    tx: mpsc::Sender<client::Completion>,
    rx: mpsc::Receiver<client::Completion>,
}

impl CodeReviewApp {
    /// Create a new application instance
    fn new(endpoint: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: AppState::new(),
            endpoint,
            http: reqwest::blocking::Client::new(),
            applied_theme: None,
            tx,
            rx,
        }
    }

    /// Apply every completion that arrived since the last frame
    fn poll_completions(&mut self) {
        while let Ok(completion) = self.rx.try_recv() {
            self.state.complete(completion.id, completion.outcome);
        }
    }

    fn dispatch(&mut self, action: code_review_backend::review::ReviewAction) {
        if let Some((id, request)) = self.state.submit(action) {
            tracing::info!(id, action = %action, endpoint = %self.endpoint, "Submitting request");
            client::spawn_request(
                self.http.clone(),
                self.endpoint.clone(),
                id,
                action,
                request,
                self.tx.clone(),
            );
        }
    }
}

impl eframe::App for CodeReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_completions();

        if self.applied_theme != Some(self.state.theme) {
            ctx.set_visuals(visuals_for(self.state.theme));
            self.applied_theme = Some(self.state.theme);
        }

        if let Some(action) = render_app_layout(ctx, &mut self.state) {
            self.dispatch(action);
        }

        // Keep polling while a request is pending
        if self.state.result().loading() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = CodeReviewApp::new(client::DEFAULT_ENDPOINT.to_string());
        assert!(!app.state.result().loading());
        assert!(app.applied_theme.is_none());
    }

    #[test]
    fn test_poll_applies_completions() {
        let mut app = CodeReviewApp::new(client::DEFAULT_ENDPOINT.to_string());
        app.tx
            .send(client::Completion {
                id: 3,
                outcome: state::Outcome::Body(serde_json::json!({ "text": "Good" })),
            })
            .unwrap();
        app.poll_completions();
        assert_eq!(app.state.result().text(), "Good");
        assert_eq!(app.state.result().last_applied(), Some(3));
    }
}
