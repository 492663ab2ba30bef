//! UI rendering subsystem
//!
//! This module contains all section rendering logic for the showcase page:
//! - Header (brand, section navigation, collapsible menu)
//! - Hero banner (title, tagline, download buttons)
//! - Features (scroll-revealed feature cards)
//! - Theme gallery (search, filters, preview, compare, favorites)
//! - Troubleshooting (collapsible FAQ)
//! - Contribute call-to-action
//! - Footer (links)
//! - Panel manager (page layout and interaction collection)

pub mod header;
pub mod hero;
pub mod features;
pub mod theme_gallery;
pub mod troubleshooting;
pub mod contribute;
pub mod footer;
pub mod panel_manager;

use egui::{Color32, RichText};

/// Renders a centered section title with an icon and a subtitle.
pub fn section_heading(ui: &mut egui::Ui, icon: &str, title: &str, subtitle: &str, accent: Color32) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new(icon).size(40.0).color(accent));
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(34.0).strong());
        ui.add_space(8.0);
        ui.label(RichText::new(subtitle).size(17.0).weak());
        ui.add_space(28.0);
    });
}

/// Button that opens `url` in the browser when clicked.
pub fn link_button(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, url: &str) -> egui::Response {
    let response = ui.button(label);
    if response.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
    response.on_hover_text(url)
}
