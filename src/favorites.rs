//! Favorite themes, persisted across sessions.

use std::collections::BTreeSet;

use crate::preferences::{self, FAVORITES_KEY};
use crate::theme::registry;

/// Deduplicated set of favorite theme names.
///
/// Every change writes the full set back to storage when one is available.
/// Write failures are logged and otherwise ignored; the in-memory set stays
/// authoritative for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    names: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads favorites from storage; missing or malformed data yields an empty set.
    ///
    /// Names no longer in the theme catalog are dropped.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let stored: Vec<String> = preferences::load_setting(storage, FAVORITES_KEY);
        let names: BTreeSet<String> = stored
            .into_iter()
            .filter(|name| registry().contains(name))
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Adds `name` if absent, removes it otherwise, then persists the whole set.
    ///
    /// Returns whether `name` is a favorite after the call. Names missing from
    /// the theme catalog are ignored.
    pub fn toggle(&mut self, name: &str, storage: Option<&mut dyn eframe::Storage>) -> bool {
        if !registry().contains(name) {
            tracing::debug!(theme = name, "ignoring favorite toggle for unknown theme");
            return false;
        }
        let now_favorite = if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        };
        tracing::debug!(theme = name, favorite = now_favorite, "toggled favorite");

        if let Some(storage) = storage {
            self.save(storage);
        }
        now_favorite
    }

    /// Writes the full set to storage.
    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        let names: Vec<&str> = self.iter().collect();
        preferences::save_setting(storage, FAVORITES_KEY, &names);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MockStorage;

    #[test]
    fn test_toggle_twice_restores_previous_set() {
        let mut favs = Favorites::new();
        favs.toggle("sakura", None);
        let before = favs.clone();

        assert!(favs.toggle("nord", None));
        assert!(!favs.toggle("nord", None));
        assert_eq!(favs, before);

        assert!(!favs.toggle("sakura", None));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_toggle_persists_full_set() {
        let mut storage = MockStorage::new();
        let mut favs = Favorites::new();
        favs.toggle("oceanic", Some(&mut storage));
        favs.toggle("cosmic", Some(&mut storage));

        let reloaded = Favorites::load(Some(&storage));
        assert_eq!(reloaded, favs);
        assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["cosmic", "oceanic"]);

        favs.toggle("cosmic", Some(&mut storage));
        let reloaded = Favorites::load(Some(&storage));
        assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["oceanic"]);
    }

    #[test]
    fn test_load_deduplicates_and_tolerates_garbage() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, FAVORITES_KEY, r#"["nord","nord","dark"]"#.to_string());
        assert_eq!(Favorites::load(Some(&storage)).len(), 2);

        eframe::Storage::set_string(&mut storage, FAVORITES_KEY, "not json".to_string());
        assert!(Favorites::load(Some(&storage)).is_empty());

        assert!(Favorites::load(None).is_empty());
    }

    #[test]
    fn test_unknown_names_are_not_favorites() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(
            &mut storage,
            FAVORITES_KEY,
            r#"["sakura","retired-theme","nord"]"#.to_string(),
        );
        let mut favs = Favorites::load(Some(&storage));
        assert_eq!(favs.iter().collect::<Vec<_>>(), vec!["nord", "sakura"]);

        assert!(!favs.toggle("retired-theme", Some(&mut storage)));
        assert_eq!(favs.len(), 2);
    }
}
