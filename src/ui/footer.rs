//! Footer rendering

use eframe::egui;
use egui::RichText;
use smartclip::Palette;

use crate::content::{self, Section, RESOURCES};
use crate::ui::link_button;

/// Renders the footer. Returns the section picked from the quick links, if any.
pub fn render_footer(ui: &mut egui::Ui, palette: &Palette) -> Option<Section> {
    let mut target = None;

    ui.add_space(48.0);
    ui.separator();
    ui.add_space(16.0);

    ui.columns(3, |columns| {
        columns[0].label(
            RichText::new(format!("📋 {}", content::APP_NAME))
                .size(20.0)
                .strong()
                .color(palette.colors.accent),
        );
        columns[0].label(content::FOOTER_BLURB);

        columns[1].label(RichText::new("Quick Links").strong());
        for section in Section::NAV {
            if columns[1].link(section.link_label()).clicked() {
                target = Some(section);
            }
        }

        columns[2].label(RichText::new("Resources").strong());
        for (label, url) in RESOURCES {
            link_button(&mut columns[2], label, url);
        }
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(content::COPYRIGHT).small().weak());
    });
    ui.add_space(16.0);

    target
}
