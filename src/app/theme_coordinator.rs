//! Theme management and persistence coordination.
//!
//! Handles loading preferences at startup, driving the selection timers,
//! applying the displayed palette and writing committed choices to storage.

use std::time::Instant;

use rand::rngs::StdRng;
use smartclip::preferences::{self, TIMING_KEY};
use smartclip::{registry, visuals_for, Favorites, SelectionTiming, SystemPreference};

use crate::app::AppState;
use crate::state::ThemeState;

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Builds the theme state from persistent storage during application startup.
    ///
    /// `forced_theme` (already validated) wins over the stored value and
    /// `preview_delay_ms` over the stored timing; neither is written back.
    /// Passing `None` as storage starts from defaults.
    pub fn load_theme_state(
        storage: Option<&dyn eframe::Storage>,
        system: SystemPreference,
        forced_theme: Option<&str>,
        rng: StdRng,
        preview_delay_ms: Option<u64>,
    ) -> ThemeState {
        let applied = match forced_theme {
            Some(name) => name.to_string(),
            None => preferences::load_applied_theme(storage, registry(), system),
        };
        let favorites = Favorites::load(storage);

        let mut timing: SelectionTiming = preferences::load_setting(storage, TIMING_KEY);
        if let Some(delay) = preview_delay_ms {
            timing.hover_delay_ms = delay;
        }

        tracing::info!(
            theme = %applied,
            favorites = favorites.len(),
            hover_delay_ms = timing.hover_delay_ms,
            "loaded theme preferences"
        );
        ThemeState::with_theme(&applied, favorites, rng, timing)
    }

    /// Fires due selection timers and schedules a repaint for the next one.
    pub fn tick(ctx: &egui::Context, state: &mut AppState, now: Instant) {
        if let Some(deadline) = state.theme.selection_mut().tick(now) {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    /// Writes the applied theme to storage if a selection was committed.
    pub fn persist_pending(state: &mut AppState, storage: Option<&mut dyn eframe::Storage>) {
        let Some(name) = state.theme.selection_mut().take_commit() else {
            return;
        };
        match storage.filter(|_| state.persists()) {
            Some(storage) => preferences::save_applied_theme(storage, &name),
            None => tracing::debug!(theme = %name, "theme kept in memory only"),
        }
    }

    /// Saves the visitor's theme and favorites. Called from `eframe::App::save`.
    ///
    /// Timing is read-only configuration and is never written here.
    pub fn save_all(state: &AppState, storage: &mut dyn eframe::Storage) {
        if !state.persists() {
            return;
        }
        preferences::save_applied_theme(storage, state.theme.applied_theme_name());
        state.theme.favorites().save(storage);
    }

    /// Applies the displayed palette to the egui context.
    ///
    /// Called every frame so previews and comparisons repaint the whole page.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let palette = state.theme.displayed_palette();
        let dark = state.theme.selection().document().is_dark();
        ctx.set_visuals(visuals_for(palette, dark));
    }
}
