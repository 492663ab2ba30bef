//! Troubleshooting FAQ rendering

use eframe::egui;
use egui::RichText;
use smartclip::Palette;

use crate::content::{self, FAQ_ITEMS};
use crate::state::FaqState;
use crate::ui::{link_button, section_heading};

/// Renders the FAQ list.
///
/// Expansion is owned by `FaqState`; returns the index of the item whose
/// header was clicked this frame.
pub fn render_troubleshooting(ui: &mut egui::Ui, faq: &FaqState, palette: &Palette) -> Option<usize> {
    let mut toggled = None;
    let colors = &palette.colors;

    section_heading(
        ui,
        "🛠",
        "Troubleshooting Guide",
        "Quick solutions to common issues. Can't find what you're looking for? Open an issue on GitHub.",
        colors.accent,
    );

    ui.vertical_centered(|ui| {
        ui.set_max_width(760.0);
        for (index, item) in FAQ_ITEMS.iter().enumerate() {
            egui::Frame::default()
                .fill(colors.primary)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let title = RichText::new(format!("{}  {}", item.icon, item.title))
                        .size(18.0)
                        .strong();
                    let response = egui::CollapsingHeader::new(title)
                        .id_salt(("faq", index))
                        .open(Some(faq.is_expanded(index)))
                        .show(ui, |ui| {
                            ui.label(RichText::new(item.description).weak());
                            ui.add_space(6.0);
                            ui.label(RichText::new("Solutions:").strong());
                            for (step, solution) in item.solutions.iter().enumerate() {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(RichText::new(format!("{}.", step + 1)).color(colors.accent));
                                    ui.label(*solution);
                                });
                            }
                        });
                    if response.header_response.clicked() {
                        toggled = Some(index);
                    }
                });
            ui.add_space(10.0);
        }

        ui.add_space(16.0);
        ui.label("Still having issues?");
        link_button(ui, "🐞 Report an Issue", content::ISSUES_URL);
    });

    toggled
}
