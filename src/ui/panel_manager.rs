//! Panel orchestration and layout management.
//!
//! Coordinates the header bar and the scrolling page (hero, features, theme
//! gallery, troubleshooting, contribute, footer) and collects their
//! interactions for the application coordinator.

use egui::Align;

use crate::app::AppState;
use crate::content::Section;
use crate::ui::theme_gallery::GalleryInteraction;
use crate::ui::{contribute, features, footer, header, hero, theme_gallery, troubleshooting};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteInteraction {
    /// A theme card (or the compare panel's apply button) was clicked
    SelectTheme(String),
    /// Pointer or focus entered a theme card
    PreviewStart(String),
    /// Pointer or focus left the hovered theme card
    PreviewEnd,
    /// A card's favorite star was clicked
    ToggleFavorite(String),
    ToggleCompare,
    ShuffleComparison,
    Randomize,
    /// The gallery scrolled out of view
    LeaveGallery,
    /// Jump to a page section
    Navigate(Section),
    /// A troubleshooting item's header was clicked
    ToggleFaq(usize),
    /// The collapsed navigation menu button was pressed
    ToggleMenu,
}

impl From<GalleryInteraction> for SiteInteraction {
    fn from(interaction: GalleryInteraction) -> Self {
        match interaction {
            GalleryInteraction::Select(name) => SiteInteraction::SelectTheme(name),
            GalleryInteraction::HoverStart(name) => SiteInteraction::PreviewStart(name),
            GalleryInteraction::HoverEnd => SiteInteraction::PreviewEnd,
            GalleryInteraction::ToggleFavorite(name) => SiteInteraction::ToggleFavorite(name),
            GalleryInteraction::ToggleCompare => SiteInteraction::ToggleCompare,
            GalleryInteraction::ShuffleComparison => SiteInteraction::ShuffleComparison,
            GalleryInteraction::Randomize => SiteInteraction::Randomize,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire page, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<SiteInteraction> {
        let mut interactions = Vec::new();

        // Palette the page is painted with (preview or comparison included)
        let palette = state.theme.displayed_palette();

        // Header turns opaque once the page has scrolled
        let header_fill = if state.nav.is_scrolled() {
            palette.colors.primary
        } else {
            ctx.style().visuals.panel_fill
        };
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::default()
                    .fill(header_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                if let Some(header_interaction) = header::render_header(ui, state, palette) {
                    interactions.push(match header_interaction {
                        header::HeaderInteraction::NavigateTo(section) => SiteInteraction::Navigate(section),
                        header::HeaderInteraction::ToggleMenu => SiteInteraction::ToggleMenu,
                    });
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    if hero::render_hero(ui, palette) {
                        interactions.push(SiteInteraction::Navigate(Section::Features));
                    }

                    Self::anchor(ui, state, Section::Features);
                    features::render_features(ui, &mut state.reveal, palette);

                    Self::anchor(ui, state, Section::Themes);
                    let gallery_top = ui.cursor().top();
                    let gallery = theme_gallery::render_theme_gallery(ui, state, palette);
                    interactions.extend(gallery.into_iter().map(SiteInteraction::from));
                    let gallery_rect = egui::Rect::from_x_y_ranges(
                        ui.max_rect().x_range(),
                        gallery_top..=ui.cursor().top(),
                    );
                    if state.nav.update_gallery_visibility(ui.is_rect_visible(gallery_rect)) {
                        interactions.push(SiteInteraction::LeaveGallery);
                    }

                    Self::anchor(ui, state, Section::Troubleshooting);
                    if let Some(index) = troubleshooting::render_troubleshooting(ui, &state.faq, palette) {
                        interactions.push(SiteInteraction::ToggleFaq(index));
                    }

                    Self::anchor(ui, state, Section::Contribute);
                    contribute::render_contribute(ui, palette);

                    if let Some(section) = footer::render_footer(ui, palette) {
                        interactions.push(SiteInteraction::Navigate(section));
                    }
                });

            state.nav.set_scroll_offset(output.state.offset.y);
        });

        interactions
    }

    /// Scrolls the page so `section` starts at the top if a jump to it is pending.
    fn anchor(ui: &mut egui::Ui, state: &mut AppState, section: Section) {
        if state.nav.take_scroll_target(section) {
            ui.scroll_to_cursor(Some(Align::TOP));
        }
    }
}
