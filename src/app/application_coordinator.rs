//! Application-level coordination and workflow management.
//!
//! Routes page interactions to the state they affect.

use std::time::Instant;

use crate::app::AppState;
use crate::ui::panel_manager::SiteInteraction;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one interaction collected while rendering the page.
    pub fn handle_interaction(
        state: &mut AppState,
        interaction: SiteInteraction,
        now: Instant,
        storage: Option<&mut dyn eframe::Storage>,
    ) {
        let storage = if state.persists() { storage } else { None };
        match interaction {
            SiteInteraction::SelectTheme(name) => {
                if let Err(err) = state.theme.selection_mut().select(&name) {
                    tracing::warn!(%err, "theme selection rejected");
                }
            }
            SiteInteraction::PreviewStart(name) => {
                if let Err(err) = state.theme.selection_mut().hover_start(&name, now) {
                    tracing::warn!(%err, "preview rejected");
                }
            }
            SiteInteraction::PreviewEnd => state.theme.selection_mut().hover_end(now),
            SiteInteraction::ToggleFavorite(name) => {
                state.theme.favorites_mut().toggle(&name, storage);
            }
            SiteInteraction::ToggleCompare => state.theme.selection_mut().toggle_compare(),
            SiteInteraction::ShuffleComparison => state.theme.selection_mut().shuffle_comparison(),
            SiteInteraction::Randomize => state.theme.selection_mut().randomize(now),
            SiteInteraction::LeaveGallery => Self::leave_gallery(state),
            SiteInteraction::Navigate(section) => state.nav.navigate_to(section),
            SiteInteraction::ToggleFaq(index) => state.faq.toggle(index),
            SiteInteraction::ToggleMenu => state.nav.toggle_menu(),
        }
    }

    /// Drops transient theme state once the gallery is off screen.
    ///
    /// The hover tracker is reset as well so returning to the gallery
    /// starts a fresh preview delay.
    pub fn leave_gallery(state: &mut AppState) {
        state.theme.selection_mut().leave_gallery();
        state.gallery.update_hover(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{MockStorage, ThemeCoordinator};
    use crate::content::Section;
    use crate::state::HoverChange;
    use eframe::Storage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smartclip::{SelectionMode, SystemPreference, FAVORITES_KEY};
    use std::time::Duration;

    fn state_with(theme: &str) -> AppState {
        AppState::new(ThemeCoordinator::load_theme_state(
            None,
            SystemPreference::Dark,
            Some(theme),
            StdRng::seed_from_u64(11),
            None,
        ))
    }

    fn handle(state: &mut AppState, interaction: SiteInteraction, now: Instant) {
        ApplicationCoordinator::handle_interaction(state, interaction, now, None);
    }

    #[test]
    fn test_theme_interactions_drive_selection() {
        let mut state = state_with("light");
        let t0 = Instant::now();

        handle(&mut state, SiteInteraction::SelectTheme("nord".into()), t0);
        assert_eq!(state.theme.applied_theme_name(), "nord");

        handle(&mut state, SiteInteraction::SelectTheme("no-such-theme".into()), t0);
        assert_eq!(state.theme.applied_theme_name(), "nord");

        handle(&mut state, SiteInteraction::PreviewStart("sakura".into()), t0);
        state.theme.selection_mut().tick(t0 + Duration::from_millis(500));
        assert_eq!(state.theme.selection().preview(), Some("sakura"));
        handle(&mut state, SiteInteraction::PreviewEnd, t0 + Duration::from_millis(600));
        state.theme.selection_mut().tick(t0 + Duration::from_millis(800));
        assert_eq!(state.theme.selection().mode(), &SelectionMode::Idle);

        handle(&mut state, SiteInteraction::ToggleCompare, t0);
        assert!(state.theme.selection().comparing().is_some());
        handle(&mut state, SiteInteraction::ShuffleComparison, t0);
        assert!(state.theme.selection().comparing().is_some());
        handle(&mut state, SiteInteraction::ToggleCompare, t0);
        assert_eq!(state.theme.selection().comparing(), None);

        handle(&mut state, SiteInteraction::Randomize, t0);
        assert!(state.theme.selection().is_randomizing());
    }

    #[test]
    fn test_page_interactions_drive_nav_and_faq() {
        let mut state = state_with("dark");
        let t0 = Instant::now();

        handle(&mut state, SiteInteraction::ToggleMenu, t0);
        assert!(state.nav.is_menu_open());
        handle(&mut state, SiteInteraction::Navigate(Section::Troubleshooting), t0);
        assert!(!state.nav.is_menu_open());
        assert!(state.nav.take_scroll_target(Section::Troubleshooting));

        handle(&mut state, SiteInteraction::ToggleFaq(1), t0);
        assert!(state.faq.is_expanded(1));
        handle(&mut state, SiteInteraction::ToggleFaq(1), t0);
        assert!(!state.faq.is_expanded(1));
    }

    #[test]
    fn test_leave_gallery_resets_hover_tracking() {
        let mut state = state_with("dark");
        let t0 = Instant::now();

        assert_eq!(state.gallery.update_hover(Some("nord")), HoverChange::Entered("nord".into()));
        handle(&mut state, SiteInteraction::PreviewStart("nord".into()), t0);
        handle(&mut state, SiteInteraction::ToggleCompare, t0);

        handle(&mut state, SiteInteraction::LeaveGallery, t0);
        assert_eq!(state.theme.selection().mode(), &SelectionMode::Idle);
        assert_eq!(state.theme.selection().next_deadline(), None);
        // Coming back over the same card starts a fresh hover
        assert_eq!(state.gallery.update_hover(Some("nord")), HoverChange::Entered("nord".into()));
    }

    #[test]
    fn test_favorite_toggle_respects_persistence() {
        let mut storage = MockStorage::new();
        let mut state = state_with("dark");
        let t0 = Instant::now();

        ApplicationCoordinator::handle_interaction(
            &mut state,
            SiteInteraction::ToggleFavorite("sunset".into()),
            t0,
            Some(&mut storage),
        );
        assert!(state.theme.favorites().contains("sunset"));
        assert_eq!(storage.get_string(FAVORITES_KEY).as_deref(), Some(r#"["sunset"]"#));

        let mut state = state.without_persistence();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            SiteInteraction::ToggleFavorite("cosmic".into()),
            t0,
            Some(&mut storage),
        );
        assert!(state.theme.favorites().contains("cosmic"));
        assert_eq!(storage.get_string(FAVORITES_KEY).as_deref(), Some(r#"["sunset"]"#));
    }
}
