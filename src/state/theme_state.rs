//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming:
//! the selection state machine (applied theme, preview, comparison)
//! and the visitor's favorite themes.

use rand::rngs::StdRng;
use smartclip::{registry, Favorites, Palette, SelectionTiming, ThemeSelection};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Owning the theme selection state machine
/// - Owning the favorites set
/// - Providing palette lookups for rendering
#[derive(Debug)]
pub struct ThemeState {
    /// Applied/preview/compare state machine
    selection: ThemeSelection,
    /// Favorite theme names
    favorites: Favorites,
}

impl ThemeState {
    /// Creates a new theme state with a specific applied theme.
    ///
    /// # Arguments
    /// * `theme_name` - The applied theme, usually loaded from storage
    /// * `favorites` - Favorites loaded from storage
    /// * `rng` - Random source for compare and randomize picks
    /// * `timing` - Preview and randomize delays
    pub fn with_theme(
        theme_name: &str,
        favorites: Favorites,
        rng: StdRng,
        timing: SelectionTiming,
    ) -> Self {
        Self {
            selection: ThemeSelection::new(registry(), theme_name, rng).with_timing(timing),
            favorites,
        }
    }

    // ===== Theme Queries =====

    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Returns the name of the applied (persisted) theme.
    pub fn applied_theme_name(&self) -> &str {
        self.selection.applied()
    }

    /// Returns the palette the page is currently painted with.
    pub fn displayed_palette(&self) -> &'static Palette {
        palette_or_default(self.selection.displayed())
    }

    /// Returns the applied palette.
    pub fn applied_palette(&self) -> &'static Palette {
        palette_or_default(self.selection.applied())
    }

    // ===== Theme Mutations =====

    pub fn selection_mut(&mut self) -> &mut ThemeSelection {
        &mut self.selection
    }

    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }
}

/// Looks up `name`, falling back to the default palette.
pub fn palette_or_default(name: &str) -> &'static Palette {
    let reg = registry();
    reg.get(name)
        .or_else(|| reg.get(smartclip::theme::DEFAULT_THEME))
        .unwrap_or(&reg.palettes()[0])
}
