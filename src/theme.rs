//! Theme registry for the Smart Clipboard showcase
//!
//! This module holds the fixed catalog of color palettes shown in the theme gallery.
//! Every palette carries five semantic color roles plus a display name and description.
//! The catalog is process-wide constant data: it is built once and never mutated.
//!
//! # Examples
//!
//! ```
//! use smartclip::theme::{registry, ThemeCategory};
//!
//! let cosmic = registry().get("cosmic").unwrap();
//! assert_eq!(cosmic.display_name, "Cosmic");
//! assert!(ThemeCategory::Dark.contains(&cosmic.name));
//! ```

use egui::Color32;
use once_cell::sync::Lazy;

use crate::error::ThemeError;

/// Name of the theme used when nothing valid is persisted and the platform gives no hint.
pub const DEFAULT_THEME: &str = "dark";

/// Theme picked when the platform reports a light preference.
pub const LIGHT_FALLBACK_THEME: &str = "light";

const DARK_THEMES: &[&str] = &[
    "dark",
    "midnight",
    "retro-groove",
    "oceanic",
    "dracula",
    "cosmic",
    "nord",
];

const LIGHT_THEMES: &[&str] = &[
    "light",
    "solaris",
    "kyoto-garden",
    "sakura",
    "mint-leaf",
    "sunset",
];

const COLORFUL_THEMES: &[&str] = &[
    "midnight",
    "solaris",
    "retro-groove",
    "oceanic",
    "sakura",
    "cosmic",
    "sunset",
];

static REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::builtin);

/// Returns the process-wide theme catalog.
pub fn registry() -> &'static ThemeRegistry {
    &REGISTRY
}

/// The five semantic color roles of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
}

impl PaletteColors {
    /// Returns the roles in display order, paired with their labels.
    pub fn roles(&self) -> [(&'static str, Color32); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("text", self.text),
            ("accent", self.accent),
        ]
    }
}

/// A named palette with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Unique identifier, also the value written to storage
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub colors: PaletteColors,
}

impl Palette {
    /// Whether the document should switch to dark mode for this palette.
    pub fn is_dark(&self) -> bool {
        is_dark_theme(&self.name)
    }
}

/// Fixed gallery classification of palettes.
///
/// Membership is a hardcoded lookup per palette name, not something computed
/// from the colors. A palette belongs to exactly one of `Light`/`Dark` and may
/// additionally be `Colorful`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCategory {
    Light,
    Dark,
    Colorful,
}

impl ThemeCategory {
    pub fn contains(&self, name: &str) -> bool {
        let members = match self {
            ThemeCategory::Light => LIGHT_THEMES,
            ThemeCategory::Dark => DARK_THEMES,
            ThemeCategory::Colorful => COLORFUL_THEMES,
        };
        members.contains(&name)
    }
}

/// Returns true when `name` is classified as a dark theme.
///
/// Unknown names are treated as dark, matching the default theme.
pub fn is_dark_theme(name: &str) -> bool {
    !LIGHT_THEMES.contains(&name)
}

/// Ordered, name-unique catalog of palettes
#[derive(Debug)]
pub struct ThemeRegistry {
    palettes: Vec<Palette>,
}

impl ThemeRegistry {
    /// Builds the registry with every built-in palette, in gallery order.
    pub fn builtin() -> Self {
        Self {
            palettes: vec![
                palette("light", "Light", "Clean, modern light interface",
                    ["#f8fafc", "#e2e8f0", "#ffffff", "#1e293b", "#3b82f6"]),
                palette("dark", "Dark", "Easy on the eyes dark mode",
                    ["#1e293b", "#334155", "#0f172a", "#f1f5f9", "#6366f1"]),
                palette("midnight", "Midnight", "Cyber neon terminal style",
                    ["#0a0a0a", "#1a1a1a", "#000000", "#00ff00", "#00ffff"]),
                palette("solaris", "Solaris", "Warm golden sunrise theme",
                    ["#fef3c7", "#fbbf24", "#fffbeb", "#92400e", "#f59e0b"]),
                palette("kyoto-garden", "Kyoto Garden", "Peaceful Japanese garden",
                    ["#ecfdf5", "#6ee7b7", "#f0fdf4", "#065f46", "#10b981"]),
                palette("retro-groove", "Retro Groove", "80s synthwave vibes",
                    ["#1e1b4b", "#7c3aed", "#0f0f23", "#c4b5fd", "#f59e0b"]),
                palette("oceanic", "Oceanic", "Deep ocean blue theme",
                    ["#0c4a6e", "#0284c7", "#082f49", "#bae6fd", "#38bdf8"]),
                palette("sakura", "Sakura", "Delicate cherry blossom",
                    ["#fdf2f8", "#f9a8d4", "#fef7ff", "#831843", "#ec4899"]),
                palette("mint-leaf", "Mint Leaf", "Fresh mint green theme",
                    ["#f0fdf4", "#86efac", "#f7fefc", "#14532d", "#22c55e"]),
                palette("dracula", "Dracula", "Popular vampire theme",
                    ["#44475a", "#6272a4", "#282a36", "#f8f8f2", "#bd93f9"]),
                palette("cosmic", "Cosmic", "Deep space nebula glow",
                    ["#2e1065", "#6d28d9", "#0c0a1d", "#e9d5ff", "#f472b6"]),
                palette("nord", "Nord", "Arctic, north-bluish calm",
                    ["#3b4252", "#4c566a", "#2e3440", "#eceff4", "#88c0d0"]),
                palette("sunset", "Sunset", "Soft evening orange glow",
                    ["#ffedd5", "#fdba74", "#fff7ed", "#7c2d12", "#f97316"]),
            ],
        }
    }

    /// Retrieves a palette by name
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Like [`get`](Self::get) but reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<&Palette, ThemeError> {
        self.get(name).ok_or_else(|| ThemeError::UnknownTheme {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns every palette in catalog order
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Returns palette names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

fn palette(name: &str, display_name: &str, description: &str, hex: [&str; 5]) -> Palette {
    let [primary, secondary, background, text, accent] = hex.map(hex_to_color32);
    Palette {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        colors: PaletteColors {
            primary,
            secondary,
            background,
            text,
            accent,
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Formats a color back into "#rrggbb" for display next to swatches
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
