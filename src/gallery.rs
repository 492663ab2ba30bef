//! Gallery search and category filtering.

use crate::favorites::Favorites;
use crate::theme::{Palette, ThemeCategory, ThemeRegistry};

/// Category chip selected in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeFilter {
    #[default]
    All,
    Light,
    Dark,
    Colorful,
    Favorites,
}

impl ThemeFilter {
    pub const ALL: [ThemeFilter; 5] = [
        ThemeFilter::All,
        ThemeFilter::Light,
        ThemeFilter::Dark,
        ThemeFilter::Colorful,
        ThemeFilter::Favorites,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeFilter::All => "All",
            ThemeFilter::Light => "Light",
            ThemeFilter::Dark => "Dark",
            ThemeFilter::Colorful => "Colorful",
            ThemeFilter::Favorites => "Favorites",
        }
    }

    pub fn matches(&self, palette: &Palette, favorites: &Favorites) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Light => ThemeCategory::Light.contains(&palette.name),
            ThemeFilter::Dark => ThemeCategory::Dark.contains(&palette.name),
            ThemeFilter::Colorful => ThemeCategory::Colorful.contains(&palette.name),
            ThemeFilter::Favorites => favorites.contains(&palette.name),
        }
    }
}

/// Lazily yields registry entries matching `query` and `category`, in catalog order.
///
/// The query is matched case-insensitively against the name, display name and
/// description; surrounding whitespace is ignored and an empty query matches
/// everything. The returned iterator is `Clone`, so it can be restarted.
pub fn filter<'a>(
    registry: &'a ThemeRegistry,
    query: &str,
    category: ThemeFilter,
    favorites: &'a Favorites,
) -> impl Iterator<Item = &'a Palette> + Clone + 'a {
    let needle = query.trim().to_lowercase();
    registry
        .palettes()
        .iter()
        .filter(move |p| category.matches(p, favorites) && matches_query(p, &needle))
}

fn matches_query(palette: &Palette, needle: &str) -> bool {
    needle.is_empty()
        || palette.name.to_lowercase().contains(needle)
        || palette.display_name.to_lowercase().contains(needle)
        || palette.description.to_lowercase().contains(needle)
}
