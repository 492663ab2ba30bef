//! Contribute call-to-action rendering

use eframe::egui;
use egui::RichText;
use smartclip::Palette;

use crate::content::{self, CONTRIBUTE_STEPS, WHY_CONTRIBUTE};
use crate::ui::{link_button, section_heading};

pub fn render_contribute(ui: &mut egui::Ui, palette: &Palette) {
    let colors = &palette.colors;

    section_heading(
        ui,
        "🤝",
        "Contribute to Smart Clipboard",
        "Join our community of developers and help make Smart Clipboard even better.",
        colors.accent,
    );

    ui.columns(2, |columns| {
        columns[0].label(RichText::new("Why Contribute?").size(22.0).strong());
        for (title, body) in WHY_CONTRIBUTE {
            columns[0].add_space(8.0);
            columns[0].label(RichText::new(title).strong().color(colors.accent));
            columns[0].label(body);
        }

        columns[1].label(RichText::new("How to Get Started").size(22.0).strong());
        for (step, (title, body)) in CONTRIBUTE_STEPS.iter().enumerate() {
            columns[1].add_space(8.0);
            columns[1].horizontal(|ui| {
                ui.label(RichText::new(format!("{}", step + 1)).size(20.0).strong().color(colors.accent));
                ui.vertical(|ui| {
                    ui.label(RichText::new(*title).strong());
                    ui.label(*body);
                });
            });
        }
    });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.horizontal_wrapped(|ui| {
            link_button(ui, RichText::new("Fork on GitHub").strong(), content::REPO_URL);
            link_button(ui, "Report an Issue", content::ISSUES_URL);
        });
    });
}
