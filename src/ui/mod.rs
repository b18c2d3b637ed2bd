// UI module
// Contains layout, components, and markdown rendering

pub mod components;
pub mod layout;
pub mod markdown;

pub use components::visuals_for;
pub use layout::render_app_layout;
