//! Per-visitor preference persistence.
//!
//! Preferences live in eframe's key-value storage. The applied theme is stored
//! as a plain string so values written by earlier releases (`"dark"`/`"light"`)
//! stay readable; everything else is stored as JSON.

use serde::{Deserialize, Serialize};

use crate::theme::{self, ThemeRegistry};

/// Storage key for the applied theme name.
pub const THEME_KEY: &str = "smart-clipboard-theme";

/// Storage key for the JSON list of favorite theme names.
pub const FAVORITES_KEY: &str = "smart-clipboard-favorite-themes";

/// Storage key for optional `SelectionTiming` overrides (JSON object).
pub const TIMING_KEY: &str = "smart-clipboard-selection-timing";

/// Platform light/dark hint used when nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPreference {
    Light,
    Dark,
    Unknown,
}

impl SystemPreference {
    pub fn default_theme(self) -> &'static str {
        match self {
            SystemPreference::Light => theme::LIGHT_FALLBACK_THEME,
            SystemPreference::Dark | SystemPreference::Unknown => theme::DEFAULT_THEME,
        }
    }
}

impl From<Option<egui::Theme>> for SystemPreference {
    fn from(theme: Option<egui::Theme>) -> Self {
        match theme {
            Some(egui::Theme::Light) => SystemPreference::Light,
            Some(egui::Theme::Dark) => SystemPreference::Dark,
            None => SystemPreference::Unknown,
        }
    }
}

/// Loads the applied theme name, always returning a name present in `registry`.
///
/// A missing value falls back to the platform preference; an unrecognized one
/// falls back to the default theme.
pub fn load_applied_theme(
    storage: Option<&dyn eframe::Storage>,
    registry: &ThemeRegistry,
    system: SystemPreference,
) -> String {
    match storage.and_then(|s| s.get_string(THEME_KEY)) {
        Some(saved) if registry.contains(&saved) => saved,
        Some(saved) => {
            tracing::debug!(theme = %saved, "ignoring unrecognized persisted theme");
            theme::DEFAULT_THEME.to_string()
        }
        None => system.default_theme().to_string(),
    }
}

/// Saves the applied theme name.
pub fn save_applied_theme(storage: &mut dyn eframe::Storage, theme_name: &str) {
    storage.set_string(THEME_KEY, theme_name.to_string());
    storage.flush();
}

/// Loads a JSON setting, falling back to `T::default()` when missing or invalid.
pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    try_load_setting(storage, key).unwrap_or_default()
}

/// Attempts to load a JSON setting, returning None if not found or invalid.
pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
{
    let json_str = storage?.get_string(key)?;
    match serde_json::from_str(&json_str) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(key, %err, "discarding malformed stored setting");
            None
        }
    }
}

/// Saves a setting as JSON. Serialization failures are logged and dropped.
pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(json_str) => {
            storage.set_string(key, json_str);
            storage.flush();
        }
        Err(err) => tracing::warn!(key, %err, "failed to serialize setting; keeping it in memory only"),
    }
}

/// Simple in-memory storage for tests
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MockStorage {
    data: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl eframe::Storage for MockStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}
