//! Hero banner rendering

use eframe::egui;
use egui::{RichText, Vec2};
use smartclip::Palette;

use crate::content;
use crate::ui::link_button;

/// Renders the hero banner.
///
/// Returns true when the visitor asked to scroll down to the features.
pub fn render_hero(ui: &mut egui::Ui, palette: &Palette) -> bool {
    let mut scroll_requested = false;
    let colors = &palette.colors;

    ui.vertical_centered(|ui| {
        ui.add_space(72.0);
        ui.label(RichText::new("📋").size(80.0).color(colors.accent));
        ui.add_space(12.0);
        ui.label(
            RichText::new(content::APP_NAME)
                .size(56.0)
                .strong()
                .color(colors.accent),
        );
        ui.add_space(12.0);
        ui.label(RichText::new(content::TAGLINE).size(22.0));
        ui.add_space(24.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(10.0, 10.0);
            for chip in content::HERO_CHIPS {
                egui::Frame::default()
                    .fill(colors.secondary.gamma_multiply(0.35))
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(chip);
                    });
            }
        });

        ui.add_space(28.0);
        ui.horizontal_wrapped(|ui| {
            link_button(
                ui,
                RichText::new("⬇ Download for macOS  .dmg").size(18.0).strong(),
                content::RELEASES_URL,
            );
            link_button(ui, RichText::new("View on GitHub").size(18.0), content::REPO_URL);
        });

        ui.add_space(32.0);
        if ui
            .add(egui::Button::new(RichText::new("⌄").size(28.0)).frame(false))
            .on_hover_text("Scroll to features")
            .clicked()
        {
            scroll_requested = true;
        }
        ui.add_space(24.0);
    });

    scroll_requested
}
