pub mod error;
pub mod favorites;
pub mod gallery;
pub mod preferences;
pub mod presentation;
pub mod selection;
pub mod theme;
pub mod timer;

// Export theme catalog
pub use theme::{
    hex_to_color32, color32_to_hex, registry, Palette, PaletteColors, ThemeCategory, ThemeRegistry,
};

// Export selection state machine
pub use selection::{SelectionMode, SelectionTiming, ThemeSelection};
pub use timer::TimerSlot;
pub use error::ThemeError;

// Export favorites, filtering and persistence
pub use favorites::Favorites;
pub use gallery::{filter, ThemeFilter};
pub use preferences::{SystemPreference, FAVORITES_KEY, THEME_KEY, TIMING_KEY};

// Export presentation
pub use presentation::{visuals_for, DocumentState, PresentationSink};
