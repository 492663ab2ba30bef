//! Presentation sink: projects the active palette onto document-level state.
//!
//! The document state is two pieces of information, the current theme name
//! marker and the dark flag. Styling code reads them (via [`visuals_for`])
//! instead of poking at the selection state machine directly.

use egui::Visuals;

use crate::theme::{self, adjust_brightness, Palette};

/// Anything that can reflect the displayed theme.
pub trait PresentationSink {
    /// Applies `name` as the displayed theme. Must be idempotent.
    fn apply_theme(&mut self, name: &str);
}

/// Document-level theme markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    theme_name: Option<String>,
    dark: bool,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the theme currently reflected by the document, if any was applied.
    pub fn theme_name(&self) -> Option<&str> {
        self.theme_name.as_deref()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

impl PresentationSink for DocumentState {
    fn apply_theme(&mut self, name: &str) {
        if self.theme_name.as_deref() != Some(name) {
            self.theme_name = Some(name.to_string());
        }
        self.dark = theme::is_dark_theme(name);
    }
}

/// Builds egui visuals for a palette, starting from egui's dark or light base.
pub fn visuals_for(palette: &Palette, dark: bool) -> Visuals {
    let colors = &palette.colors;
    let mut visuals = if dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    // Backgrounds
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.primary;
    visuals.extreme_bg_color = colors.primary;
    visuals.faint_bg_color = colors.secondary;

    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke.color = colors.text;
    visuals.hyperlink_color = colors.accent;

    // Widgets
    visuals.widgets.noninteractive.bg_fill = colors.primary;
    visuals.widgets.inactive.bg_fill = colors.secondary;
    visuals.widgets.inactive.weak_bg_fill = colors.primary;
    visuals.widgets.hovered.bg_fill = adjust_brightness(colors.secondary, if dark { 1.25 } else { 0.9 });
    visuals.widgets.hovered.weak_bg_fill = colors.secondary;
    visuals.widgets.active.bg_fill = colors.accent;
    visuals.widgets.active.weak_bg_fill = colors.accent;

    visuals
}
