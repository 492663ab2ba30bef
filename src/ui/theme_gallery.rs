//! Theme gallery UI rendering
//!
//! Handles the searchable palette grid, hover previews, favorites, comparison
//! and randomize controls. Theme changes are reported as interactions; only the
//! gallery's own view state (query, category chip) is edited in place.

use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Vec2};
use smartclip::theme::color32_to_hex;
use smartclip::{filter, registry, Palette, ThemeFilter};

use crate::app::AppState;
use crate::state::{palette_or_default, HoverChange};
use crate::ui::section_heading;

const CARD_SIZE: Vec2 = Vec2::new(180.0, 170.0);
const PREVIEW_HEIGHT: f32 = 100.0;

/// Result of gallery interactions that need to be handled by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryInteraction {
    Select(String),
    HoverStart(String),
    HoverEnd,
    ToggleFavorite(String),
    ToggleCompare,
    ShuffleComparison,
    Randomize,
}

/// Renders the complete theme gallery section.
pub fn render_theme_gallery(ui: &mut egui::Ui, state: &mut AppState, palette: &Palette) -> Vec<GalleryInteraction> {
    let mut interactions = Vec::new();

    section_heading(
        ui,
        "🎨",
        &format!("{} Beautiful Themes", registry().len()),
        "Customize Smart Clipboard to match your workflow and aesthetic preferences.",
        palette.colors.accent,
    );

    render_controls(ui, state, &mut interactions);
    ui.add_space(16.0);

    let hovered = render_grid(ui, state, &mut interactions);
    match state.gallery.update_hover(hovered.as_deref()) {
        HoverChange::Unchanged => {}
        HoverChange::Entered(name) => interactions.push(GalleryInteraction::HoverStart(name)),
        HoverChange::Left => interactions.push(GalleryInteraction::HoverEnd),
        HoverChange::Moved { to } => {
            interactions.push(GalleryInteraction::HoverEnd);
            interactions.push(GalleryInteraction::HoverStart(to));
        }
    }

    ui.add_space(32.0);
    if let Some(comparing) = state.theme.selection().comparing() {
        render_comparison(ui, state.theme.applied_palette(), palette_or_default(comparing), &mut interactions);
    } else {
        render_details(ui, state.theme.applied_palette());
    }

    interactions
}

/// Search box, category chips and the randomize/compare buttons.
fn render_controls(ui: &mut egui::Ui, state: &mut AppState, interactions: &mut Vec<GalleryInteraction>) {
    let comparing = state.theme.selection().comparing().is_some();
    let randomizing = state.theme.selection().is_randomizing();

    ui.horizontal_wrapped(|ui| {
        ui.add(
            egui::TextEdit::singleline(state.gallery.query_mut())
                .hint_text("🔍 Search themes…")
                .desired_width(220.0),
        );

        ui.separator();
        for chip in ThemeFilter::ALL {
            let label = match chip {
                ThemeFilter::Favorites => format!("★ {} ({})", chip.label(), state.theme.favorites().len()),
                _ => chip.label().to_string(),
            };
            if ui.selectable_label(state.gallery.filter() == chip, label).clicked() {
                state.gallery.set_filter(chip);
            }
        }

        ui.separator();
        if ui
            .add_enabled(!randomizing, egui::Button::new("🎲 Randomize"))
            .on_hover_text("R")
            .clicked()
        {
            interactions.push(GalleryInteraction::Randomize);
        }
        let compare_label = if comparing { "✖ Close compare" } else { "⚖ Compare" };
        if ui
            .add_enabled(!randomizing, egui::Button::new(compare_label))
            .on_hover_text("C")
            .clicked()
        {
            interactions.push(GalleryInteraction::ToggleCompare);
        }
        if ui
            .add_enabled(comparing, egui::Button::new("🔀 Shuffle"))
            .on_hover_text("S")
            .clicked()
        {
            interactions.push(GalleryInteraction::ShuffleComparison);
        }
    });

    // Shortcuts only when no text field owns the keyboard
    if !ui.ctx().wants_keyboard_input() {
        let (r, c, s, esc) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if r && !randomizing {
            interactions.push(GalleryInteraction::Randomize);
        }
        if (c && !randomizing) || (esc && comparing) {
            interactions.push(GalleryInteraction::ToggleCompare);
        }
        if s && comparing {
            interactions.push(GalleryInteraction::ShuffleComparison);
        }
    }
}

/// Renders the filtered card grid and returns the card under the pointer (or focus).
fn render_grid(
    ui: &mut egui::Ui,
    state: &mut AppState,
    interactions: &mut Vec<GalleryInteraction>,
) -> Option<String> {
    let selection = state.theme.selection();
    let favorites = state.theme.favorites();
    let matches: Vec<&Palette> =
        filter(registry(), state.gallery.query(), state.gallery.filter(), favorites).collect();

    if matches.is_empty() {
        let mut clear = false;
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("No themes match your search").size(18.0).weak());
            clear = ui.button("Clear search").clicked();
            ui.add_space(24.0);
        });
        if clear {
            state.gallery.clear_search();
        }
        return None;
    }

    let mut hovered = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(18.0);
        for palette in matches {
            let card = CardStatus {
                applied: selection.applied() == palette.name,
                previewing: selection.preview() == Some(palette.name.as_str()),
                favorite: favorites.contains(&palette.name),
            };
            let (response, favorite_clicked) = render_card(ui, palette, card);

            if favorite_clicked {
                interactions.push(GalleryInteraction::ToggleFavorite(palette.name.clone()));
            } else if response.clicked() {
                interactions.push(GalleryInteraction::Select(palette.name.clone()));
            }
            if response.hovered() || response.has_focus() {
                hovered = Some(palette.name.clone());
            }
        }
    });
    hovered
}

#[derive(Clone, Copy)]
struct CardStatus {
    applied: bool,
    previewing: bool,
    favorite: bool,
}

/// Paints one palette card. Returns the card response and whether the star was clicked.
fn render_card(ui: &mut egui::Ui, palette: &Palette, status: CardStatus) -> (egui::Response, bool) {
    let colors = &palette.colors;
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    let visuals = ui.visuals().clone();

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect.expand(4.0));
        let preview_rect = egui::Rect::from_min_size(rect.min, Vec2::new(rect.width(), PREVIEW_HEIGHT));

        // Mini window in the palette's own colors
        painter.rect_filled(preview_rect, 14.0, colors.background);
        let dot_y = preview_rect.top() + 16.0;
        for (i, (color, alpha)) in [(colors.accent, 1.0), (colors.secondary, 0.6), (colors.primary, 0.4)]
            .into_iter()
            .enumerate()
        {
            let center = egui::pos2(preview_rect.left() + 16.0 + i as f32 * 14.0, dot_y);
            painter.circle_filled(center, 5.0, color.gamma_multiply(alpha));
        }
        let bar_left = preview_rect.left() + 12.0;
        let bar_span = preview_rect.width() - 24.0;
        for (i, (color, fraction)) in [(colors.primary, 0.8), (colors.secondary, 0.6), (colors.primary, 0.9)]
            .into_iter()
            .enumerate()
        {
            let top = preview_rect.top() + 44.0 + i as f32 * 16.0;
            let bar = egui::Rect::from_min_size(egui::pos2(bar_left, top), Vec2::new(bar_span * fraction, 8.0));
            painter.rect_filled(bar, 3.0, color);
        }

        if response.hovered() {
            painter.rect_filled(preview_rect, 14.0, Color32::from_black_alpha(50));
            painter.text(
                preview_rect.center(),
                Align2::CENTER_CENTER,
                "Preview",
                FontId::proportional(15.0),
                Color32::WHITE,
            );
        }

        let outline = if status.applied {
            Some(Stroke::new(3.0, visuals.selection.bg_fill))
        } else if status.previewing {
            Some(Stroke::new(2.0, colors.accent))
        } else if response.has_focus() {
            Some(visuals.widgets.hovered.fg_stroke)
        } else {
            None
        };
        if let Some(stroke) = outline {
            painter.rect_stroke(preview_rect, 14.0, stroke, egui::StrokeKind::Outside);
        }

        if status.applied {
            let badge = egui::pos2(preview_rect.right() - 14.0, preview_rect.top() + 14.0);
            painter.circle_filled(badge, 10.0, Color32::from_rgb(34, 197, 94));
            painter.text(badge, Align2::CENTER_CENTER, "✔", FontId::proportional(12.0), Color32::WHITE);
        }

        // Name and description under the preview
        let text_color = visuals.text_color();
        painter.text(
            egui::pos2(rect.center().x, preview_rect.bottom() + 10.0),
            Align2::CENTER_TOP,
            &palette.display_name,
            FontId::proportional(16.0),
            text_color,
        );
        let description = painter.layout(
            palette.description.clone(),
            FontId::proportional(12.0),
            visuals.weak_text_color(),
            rect.width(),
        );
        let description_pos = egui::pos2(
            rect.center().x - description.size().x / 2.0,
            preview_rect.bottom() + 32.0,
        );
        painter.galley(description_pos, description, text_color);
    }

    let star_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 30.0, rect.top() + PREVIEW_HEIGHT - 30.0),
        Vec2::splat(24.0),
    );
    let star = if status.favorite { "★" } else { "☆" };
    let star_response = ui
        .put(
            star_rect,
            egui::Button::new(RichText::new(star).size(18.0).color(colors.accent)).frame(false),
        )
        .on_hover_text(if status.favorite { "Remove from favorites" } else { "Add to favorites" });

    let response = response.on_hover_text_at_pointer(&palette.description);
    (response, star_response.clicked())
}

/// Details of the applied theme, with its five color roles.
fn render_details(ui: &mut egui::Ui, applied: &Palette) {
    ui.vertical_centered(|ui| {
        egui::Frame::default()
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(16.0)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_max_width(560.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{} Theme", applied.display_name)).size(24.0).strong());
                    ui.add_space(6.0);
                    ui.label(&applied.description);
                    ui.add_space(14.0);
                    render_roles(ui, applied);
                });
            });
    });
}

/// Side-by-side view of the applied theme and the comparison candidate.
fn render_comparison(
    ui: &mut egui::Ui,
    applied: &Palette,
    candidate: &Palette,
    interactions: &mut Vec<GalleryInteraction>,
) {
    ui.columns(2, |columns| {
        for (column, palette, title) in [
            (0, applied, "Current"),
            (1, candidate, "Candidate"),
        ] {
            let ui = &mut columns[column];
            egui::Frame::default()
                .fill(palette.colors.background)
                .corner_radius(16.0)
                .inner_margin(egui::Margin::same(18))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(title).small().color(palette.colors.accent));
                        ui.label(
                            RichText::new(&palette.display_name)
                                .size(22.0)
                                .strong()
                                .color(palette.colors.text),
                        );
                        ui.label(RichText::new(&palette.description).color(palette.colors.text));
                        ui.add_space(10.0);
                        render_roles(ui, palette);
                        if column == 1 {
                            ui.add_space(10.0);
                            if ui.button(format!("Apply {}", palette.display_name)).clicked() {
                                interactions.push(GalleryInteraction::Select(palette.name.clone()));
                            }
                        }
                    });
                });
        }
    });
}

fn render_roles(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        for (role, color) in palette.colors.roles() {
            ui.vertical(|ui| {
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(32.0), Sense::hover());
                ui.painter().circle(
                    rect.center(),
                    15.0,
                    color,
                    Stroke::new(2.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
                );
                response.on_hover_text(color32_to_hex(color));
                ui.label(RichText::new(role).small());
            });
        }
    });
}
