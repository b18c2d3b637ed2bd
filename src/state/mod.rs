// State management module
// Handles editor inputs, theme and the response panel

pub mod app_state;

pub use app_state::{AppState, Outcome, RequestId, Theme};
