// Main application layout
// Top bar, editor panel on the left, response panel on the right

use code_review_backend::review::ReviewAction;
use eframe::egui;

use crate::state::AppState;
use crate::ui::components::*;
use crate::ui::markdown::render_markdown;

/// Render the main application layout
/// Returns the action the user clicked this frame, if any
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) -> Option<ReviewAction> {
    render_top_bar(ctx, state);

    let clicked = render_editor_panel(ctx, state);

    egui::CentralPanel::default().show(ctx, |ui| {
        render_response_panel(ui, state);
    });

    clicked
}

/// Render the title bar with the theme switch
fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading("Code Review Assistant");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if theme_toggle(ui, state.theme) {
                    state.toggle_theme();
                }
            });
        });
        ui.add_space(6.0);
    });
}

/// Render the left panel: picker, buttons, code editor
fn render_editor_panel(ctx: &egui::Context, state: &mut AppState) -> Option<ReviewAction> {
    let mut clicked = None;
    let enabled = !state.result().loading();

    egui::SidePanel::left("editor_panel")
        .resizable(true)
        .default_width(ctx.screen_rect().width() / 2.0)
        .min_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                language_picker(ui, &mut state.language);
                ui.add_space(8.0);
                if action_button(ui, ReviewAction::Fix, enabled) {
                    clicked = Some(ReviewAction::Fix);
                }
                if action_button(ui, ReviewAction::Review, enabled) {
                    clicked = Some(ReviewAction::Review);
                }
            });

            if let Some(notice) = &state.notice {
                ui.add_space(4.0);
                notice_label(ui, notice);
            }

            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_source("editor_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(&mut state.code)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
        });

    clicked
}

/// Render the right panel with the model's answer
fn render_response_panel(ui: &mut egui::Ui, state: &AppState) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Response").strong().size(18.0));
        if let Some(id) = state.result().last_applied() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("request #{}", id)).weak().small());
            });
        }
    });
    ui.add_space(4.0);
    ui.separator();

    if state.result().loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(egui::Spinner::new().size(64.0));
        });
    }

    egui::ScrollArea::vertical()
        .id_source("response_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            render_markdown(ui, state.result().text());
        });
}
