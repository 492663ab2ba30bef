//! Theme gallery view state: search text, category chip and hovered card.

use smartclip::ThemeFilter;

/// Pointer transition between gallery cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(String),
    Left,
    Moved { to: String },
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Free-text search query
    query: String,
    /// Selected category chip
    filter: ThemeFilter,
    /// Card under the pointer as of the last frame
    hovered: Option<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn filter(&self) -> ThemeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ThemeFilter) {
        self.filter = filter;
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.filter = ThemeFilter::All;
    }

    /// Records the card hovered this frame and reports the edge, if any.
    pub fn update_hover(&mut self, hovered: Option<&str>) -> HoverChange {
        if self.hovered.as_deref() == hovered {
            return HoverChange::Unchanged;
        }
        let change = match (&self.hovered, hovered) {
            (None, Some(name)) => HoverChange::Entered(name.to_string()),
            (Some(_), Some(name)) => HoverChange::Moved { to: name.to_string() },
            (_, None) => HoverChange::Left,
        };
        self.hovered = hovered.map(str::to_string);
        change
    }
}
