//! Centralized application state for the showcase page.
//!
//! Composes focused state components that each manage one aspect of the page,
//! so the borrow checker allows disjoint access from different sections.

use crate::state::{FaqState, GalleryState, NavState, RevealState, ThemeState};

/// Main application state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    /// Theme selection and favorites
    pub theme: ThemeState,

    /// Gallery search, category and hover tracking
    pub gallery: GalleryState,

    /// Expanded troubleshooting items
    pub faq: FaqState,

    /// Feature card reveal timestamps
    pub reveal: RevealState,

    /// Header scroll and menu state
    pub nav: NavState,

    /// Whether preference changes are written back to storage
    persist: bool,
}

impl AppState {
    /// Creates a new application state around a loaded theme state.
    pub fn new(theme: ThemeState) -> Self {
        Self {
            theme,
            gallery: GalleryState::new(),
            faq: FaqState::new(),
            reveal: RevealState::new(),
            nav: NavState::new(),
            persist: true,
        }
    }

    /// Keeps every preference change in memory for this run.
    pub fn without_persistence(mut self) -> Self {
        self.persist = false;
        self
    }

    pub fn persists(&self) -> bool {
        self.persist
    }
}
