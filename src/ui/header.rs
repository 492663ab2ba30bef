//! Header panel UI rendering
//!
//! Handles the top bar with the brand, section navigation and outbound links.
//! On narrow windows the navigation collapses into a toggleable menu.

use eframe::egui;
use egui::RichText;
use smartclip::Palette;

use crate::app::AppState;
use crate::content::{self, Section};
use crate::state::COMPACT_WIDTH;
use crate::ui::link_button;

/// Result of user interaction with the header
pub enum HeaderInteraction {
    /// User picked a section from the navigation
    NavigateTo(Section),
    /// User pressed the menu button
    ToggleMenu,
}

/// Renders the header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `palette` - Palette currently painted on the page
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState, palette: &Palette) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let compact = ui.ctx().content_rect().width() < COMPACT_WIDTH;

    ui.horizontal(|ui| {
        ui.label(RichText::new("📋").size(22.0).color(palette.colors.accent));
        ui.label(RichText::new(content::APP_NAME).size(20.0).strong());

        if !compact {
            ui.add_space(24.0);
            for section in Section::NAV {
                if ui.button(section.nav_label()).clicked() {
                    interaction = Some(HeaderInteraction::NavigateTo(section));
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if compact {
                let icon = if state.nav.is_menu_open() { "✖" } else { "☰" };
                if ui.button(icon).clicked() {
                    interaction = Some(HeaderInteraction::ToggleMenu);
                }
            }

            link_button(ui, "⬇ Download", content::RELEASES_URL);
            link_button(ui, "GitHub", content::REPO_URL);

            ui.separator();
            ui.label(
                RichText::new(&state.theme.displayed_palette().display_name)
                    .color(palette.colors.accent),
            )
            .on_hover_text("Current theme");
        });
    });

    if compact && state.nav.is_menu_open() {
        ui.separator();
        ui.vertical(|ui| {
            for section in Section::NAV {
                if ui.button(section.nav_label()).clicked() {
                    interaction = Some(HeaderInteraction::NavigateTo(section));
                }
            }
            ui.horizontal(|ui| {
                link_button(ui, "GitHub", content::REPO_URL);
                link_button(ui, "⬇ Download", content::RELEASES_URL);
            });
        });
    }

    interaction
}
