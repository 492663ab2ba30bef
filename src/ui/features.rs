//! Feature cards with scroll-triggered reveal

use eframe::egui;
use egui::{RichText, Vec2};
use smartclip::Palette;

use crate::content::FEATURES;
use crate::state::RevealState;
use crate::ui::section_heading;

const CARD_WIDTH: f32 = 300.0;
/// Fraction of a card that must be on screen before it is revealed
const REVEAL_THRESHOLD: f32 = 0.3;

/// Renders the feature grid, revealing cards as they scroll into view.
pub fn render_features(ui: &mut egui::Ui, reveal: &mut RevealState, palette: &Palette) {
    let colors = &palette.colors;
    let now = ui.input(|i| i.time);

    section_heading(
        ui,
        "⚡",
        "Powerful Features",
        "Everything you need for a smarter clipboard experience, built with developers in mind.",
        colors.accent,
    );

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(20.0);
        for (index, feature) in FEATURES.iter().enumerate() {
            let rect = ui
                .scope(|ui| {
                    ui.set_opacity(reveal.progress(index, now));
                    egui::Frame::default()
                        .fill(colors.primary)
                        .stroke(egui::Stroke::new(1.0, colors.secondary))
                        .corner_radius(16.0)
                        .inner_margin(egui::Margin::same(18))
                        .show(ui, |ui| {
                            ui.set_width(CARD_WIDTH);
                            ui.label(RichText::new(feature.icon).size(30.0).color(colors.accent));
                            ui.add_space(6.0);
                            ui.label(RichText::new(feature.title).size(19.0).strong());
                            ui.add_space(4.0);
                            ui.label(feature.description);
                            ui.add_space(8.0);
                            for detail in feature.details {
                                ui.label(
                                    RichText::new(format!("• {detail}")).color(colors.accent),
                                );
                            }
                        });
                })
                .response
                .rect;

            if !reveal.is_revealed(index) {
                let on_screen = rect.intersect(ui.clip_rect());
                if on_screen.is_positive() && on_screen.height() >= rect.height() * REVEAL_THRESHOLD {
                    reveal.mark_visible(index, now);
                }
            }
        }
    });

    if reveal.is_animating(now) {
        ui.ctx().request_repaint();
    }
}
