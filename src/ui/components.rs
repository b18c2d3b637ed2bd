// Reusable UI components
// Theme switch, language picker, action buttons

use code_review_backend::review::{Language, ReviewAction};
use eframe::egui;

use crate::state::Theme;

/// egui visuals for a theme
pub fn visuals_for(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

/// Render the theme toggle button
/// Returns true when clicked
pub fn theme_toggle(ui: &mut egui::Ui, theme: Theme) -> bool {
    let label = match theme {
        Theme::Dark => "☀ Light",
        Theme::Light => "🌙 Dark",
    };
    ui.button(label).clicked()
}

/// Render the language dropdown
pub fn language_picker(ui: &mut egui::Ui, language: &mut Option<Language>) {
    let selected = language
        .map(Language::label)
        .unwrap_or("Select a Language...");

    egui::ComboBox::from_id_source("language_picker")
        .selected_text(selected)
        .width(260.0)
        .show_ui(ui, |ui| {
            for lang in Language::ALL {
                ui.selectable_value(language, Some(lang), lang.label());
            }
        });
}

/// Render a Review / Fix Code button, disabled while a request is pending
pub fn action_button(ui: &mut egui::Ui, action: ReviewAction, enabled: bool) -> bool {
    let text = match action {
        ReviewAction::Review => "Review",
        ReviewAction::Fix => "Fix Code",
    };
    ui.add_enabled(enabled, egui::Button::new(egui::RichText::new(text).strong()))
        .clicked()
}

/// Render a validation notice in warning colour
pub fn notice_label(ui: &mut egui::Ui, notice: &str) {
    ui.colored_label(ui.visuals().warn_fg_color, notice);
}
