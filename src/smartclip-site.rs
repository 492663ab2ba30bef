//! Smart Clipboard showcase application
//!
//! An interactive product page for the Smart Clipboard clipboard manager,
//! rendered natively with egui. The page features:
//! - Header navigation that scrolls to sections
//! - Scroll-revealed feature cards
//! - A theme gallery with hover previews, comparison, randomize and favorites
//! - A collapsible troubleshooting guide
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `state/` - Focused state components for each page section
//! - `ui/` - Section rendering and interaction collection
//! - `content` - Static page copy
//!
//! Theme data, the selection state machine and preference persistence live in
//! the `smartclip` library.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

mod app;
mod content;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use smartclip::{registry, SystemPreference};
use ui::panel_manager::PanelManager;

/// Command-line options for the showcase window.
#[derive(Debug, Clone, Parser)]
#[command(name = "smartclip-site", version, about = "Smart Clipboard showcase")]
struct Cli {
    /// Start with this theme instead of the saved one
    #[arg(long, value_name = "NAME", value_parser = parse_theme)]
    theme: Option<String>,

    /// Ignore saved theme, favorites and timing for this run; nothing is written back
    #[arg(long)]
    reset_preferences: bool,

    /// Seed for the compare and randomize picks
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Hover time in milliseconds before a theme preview starts
    #[arg(long, value_name = "MS")]
    preview_delay_ms: Option<u64>,
}

/// Accepts only names present in the theme catalog.
fn parse_theme(name: &str) -> anyhow::Result<String> {
    registry()
        .require(name)
        .map(|palette| palette.name.clone())
        .with_context(|| format!("available themes: {}", registry().names().join(", ")))
}

/// Main application entry point that initializes logging and launches the window.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title(content::APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        content::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(SmartClipApp::new(cc, cli)))),
    )
}

/// The showcase application.
///
/// Delegates most functionality to coordinators:
/// - `ThemeCoordinator` handles preference loading, timers and persistence
/// - `ApplicationCoordinator` routes page interactions to state
/// - `PanelManager` handles layout and rendering
struct SmartClipApp {
    /// Centralized application state
    state: AppState,
}

impl SmartClipApp {
    /// Creates the application with preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, cli: Cli) -> Self {
        let system = SystemPreference::from(cc.egui_ctx.system_theme());
        let storage = if cli.reset_preferences {
            tracing::info!("ignoring saved preferences");
            None
        } else {
            cc.storage
        };
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let theme = ThemeCoordinator::load_theme_state(
            storage,
            system,
            cli.theme.as_deref(),
            rng,
            cli.preview_delay_ms,
        );
        let state = AppState::new(theme);
        Self {
            state: if cli.reset_preferences {
                state.without_persistence()
            } else {
                state
            },
        }
    }
}

/// Reborrows the frame's storage as a trait object with a local lifetime.
fn storage_of(frame: &mut eframe::Frame) -> Option<&mut dyn eframe::Storage> {
    match frame.storage_mut() {
        Some(storage) => Some(storage),
        None => None,
    }
}

impl eframe::App for SmartClipApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_all(&self.state, storage);
    }

    /// Main update loop.
    ///
    /// 1. Fire due preview/randomize timers
    /// 2. Apply the displayed theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle collected interactions
    /// 5. Persist a committed theme choice
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::tick(ctx, &mut self.state, Instant::now());
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let interactions = PanelManager::render_all_panels(ctx, &mut self.state);

        let now = Instant::now();
        for interaction in interactions {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction, now, storage_of(frame));
        }
        if let Some(deadline) = self.state.theme.selection().next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        ThemeCoordinator::persist_pending(&mut self.state, storage_of(frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_catalog_themes_only() {
        let cli = Cli::try_parse_from(["smartclip-site", "--theme", "nord", "--reset-preferences"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert!(cli.reset_preferences);

        assert!(Cli::try_parse_from(["smartclip-site", "--theme", "not-a-theme"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["smartclip-site"]).unwrap();
        assert_eq!(cli.theme, None);
        assert!(!cli.reset_preferences);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.preview_delay_ms, None);
    }
}
