use smartclip::preferences::{load_applied_theme, load_setting, save_applied_theme, save_setting};
use smartclip::{
    filter, registry, Favorites, SelectionMode, SelectionTiming, SystemPreference, ThemeError,
    ThemeFilter, ThemeSelection, FAVORITES_KEY, THEME_KEY, TIMING_KEY,
};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// In-memory stand-in for eframe's persisted storage
#[derive(Default)]
struct MemoryStorage {
    data: HashMap<String, String>,
    flushes: usize,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

fn selection(applied: &str) -> ThemeSelection {
    ThemeSelection::new(registry(), applied, StdRng::seed_from_u64(7))
}

#[test]
fn test_applied_theme_survives_restart() -> Result<()> {
    let mut storage = MemoryStorage::default();

    let mut session = selection("dark");
    session.select("cosmic")?;
    if let Some(name) = session.take_commit() {
        save_applied_theme(&mut storage, &name);
    }
    assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("cosmic"));
    assert!(storage.flushes > 0);

    let reloaded = load_applied_theme(Some(&storage), registry(), SystemPreference::Light);
    assert_eq!(reloaded, "cosmic");
    let restarted = selection(&reloaded);
    assert_eq!(restarted.applied(), "cosmic");
    assert_eq!(restarted.document().theme_name(), Some("cosmic"));
    assert!(restarted.document().is_dark());
    Ok(())
}

#[test]
fn test_first_visit_follows_platform_preference() {
    let storage = MemoryStorage::default();
    assert_eq!(load_applied_theme(Some(&storage), registry(), SystemPreference::Light), "light");
    assert_eq!(load_applied_theme(Some(&storage), registry(), SystemPreference::Dark), "dark");
    assert_eq!(load_applied_theme(None, registry(), SystemPreference::Unknown), "dark");
}

#[test]
fn test_select_is_idempotent_for_every_theme() -> Result<()> {
    for name in registry().names() {
        let mut once = selection("light");
        once.select(name)?;
        let mut twice = selection("light");
        twice.select(name)?;
        twice.select(name)?;

        assert_eq!(once.applied(), twice.applied());
        assert_eq!(once.mode(), twice.mode());
        assert_eq!(once.document(), twice.document());
    }
    Ok(())
}

#[test]
fn test_unknown_theme_is_rejected() {
    let mut session = selection("nord");
    let err = session.select("not-a-theme").unwrap_err();
    assert_eq!(err, ThemeError::UnknownTheme { name: "not-a-theme".into() });
    assert_eq!(session.applied(), "nord");
    assert_eq!(session.take_commit(), None);
}

#[test]
fn test_favorites_round_trip_through_storage() {
    let mut storage = MemoryStorage::default();
    let mut favorites = Favorites::load(Some(&storage));
    assert!(favorites.is_empty());

    assert!(favorites.toggle("sakura", Some(&mut storage)));
    assert!(favorites.toggle("nord", Some(&mut storage)));
    assert!(!favorites.toggle("sakura", Some(&mut storage)));

    let reloaded = Favorites::load(Some(&storage));
    assert_eq!(reloaded, favorites);
    assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["nord"]);
    assert_eq!(storage.data.get(FAVORITES_KEY).map(String::as_str), Some(r#"["nord"]"#));
}

#[test]
fn test_favorites_filter_tracks_toggles() {
    let mut favorites = Favorites::new();
    favorites.toggle("dracula", None);
    favorites.toggle("mint-leaf", None);

    let names: Vec<&str> = filter(registry(), "", ThemeFilter::Favorites, &favorites)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["mint-leaf", "dracula"]);

    let dark: Vec<&str> = filter(registry(), "", ThemeFilter::Favorites, &favorites)
        .filter(|p| p.is_dark())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(dark, vec!["dracula"]);
}

#[test]
fn test_filter_edges() {
    let favorites = Favorites::new();
    let all: Vec<&str> = filter(registry(), "", ThemeFilter::All, &favorites)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(all, registry().names());
    assert_eq!(filter(registry(), "nonexistent-zzz", ThemeFilter::All, &favorites).count(), 0);
    assert_eq!(filter(registry(), "", ThemeFilter::Favorites, &favorites).count(), 0);
}

#[test]
fn test_quick_hover_never_previews() {
    let mut session = selection("light");
    let start = Instant::now();

    session.hover_start("oceanic", start).unwrap();
    session.tick(start + Duration::from_millis(200));
    session.hover_end(start + Duration::from_millis(300));
    session.tick(start + Duration::from_secs(2));

    assert_eq!(session.mode(), &SelectionMode::Idle);
    assert_eq!(session.document().theme_name(), Some("light"));
}

#[test]
fn test_long_hover_previews_then_reverts() {
    let mut session = selection("light");
    let start = Instant::now();

    session.hover_start("oceanic", start).unwrap();
    session.tick(start + Duration::from_millis(510));
    assert_eq!(session.preview(), Some("oceanic"));
    assert_eq!(session.document().theme_name(), Some("oceanic"));

    session.hover_end(start + Duration::from_millis(600));
    session.tick(start + Duration::from_millis(810));
    assert_eq!(session.mode(), &SelectionMode::Idle);
    assert_eq!(session.document().theme_name(), Some("light"));
    assert_eq!(session.applied(), "light");
}

#[test]
fn test_compare_toggle_twice_returns_to_idle() {
    let mut session = selection("sunset");
    session.toggle_compare();
    let comparing = session.comparing().map(str::to_string);
    assert!(comparing.is_some());
    assert_ne!(comparing.as_deref(), Some("sunset"));

    session.toggle_compare();
    assert_eq!(session.mode(), &SelectionMode::Idle);
    assert_eq!(session.comparing(), None);
    assert_eq!(session.applied(), "sunset");
}

#[test]
fn test_timing_overrides_merge_with_defaults() {
    let mut storage = MemoryStorage::default();
    storage.data.insert(TIMING_KEY.to_string(), r#"{"hover_delay_ms": 250}"#.to_string());

    let timing: SelectionTiming = load_setting(Some(&storage), TIMING_KEY);
    assert_eq!(timing.hover_delay_ms, 250);
    assert_eq!(timing.hover_grace_ms, SelectionTiming::default().hover_grace_ms);

    storage.data.insert(
        TIMING_KEY.to_string(),
        r#"{"hover_delay_ms": 250, "hover_grace_ms": "oops"}"#.to_string(),
    );
    let mixed: SelectionTiming = load_setting(Some(&storage), TIMING_KEY);
    assert_eq!(mixed.hover_delay_ms, 250);
    assert_eq!(mixed.hover_grace_ms, 200);

    save_setting(&mut storage, TIMING_KEY, &SelectionTiming::default());
    let restored: SelectionTiming = load_setting(Some(&storage), TIMING_KEY);
    assert_eq!(restored, SelectionTiming::default());
}
