// State management module
// Handles the immutable router state shared across requests

pub mod app_state;

pub use app_state::{AppState, SharedState};
