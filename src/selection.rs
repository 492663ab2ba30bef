//! Theme selection state machine.
//!
//! Tracks the applied (persisted) theme together with the ephemeral hover
//! preview, comparison candidate and randomize animation. All transitions run
//! synchronously on the UI thread; the three delayed transitions are
//! [`TimerSlot`]s polled from the frame loop through [`ThemeSelection::tick`].
//!
//! ```text
//!             hover_start + delay            hover_end + grace
//!   Idle ───────────────────────▶ Previewing ─────────────────▶ Idle
//!    │ ▲                                                        ▲
//!    │ └──────────── toggle_compare ◀──── Comparing             │
//!    └─ randomize ──▶ Randomizing ── last step ──▶ select ──────┘
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ThemeError;
use crate::presentation::{DocumentState, PresentationSink};
use crate::theme::{self, ThemeRegistry};
use crate::timer::TimerSlot;

/// Delays driving the preview and randomize transitions.
///
/// Deserialization is lenient: a missing or wrongly typed field keeps its
/// default while the other fields are still read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionTiming {
    /// Hover time before a preview activates
    pub hover_delay_ms: u64,
    /// Time a preview lingers after the pointer leaves
    pub hover_grace_ms: u64,
    /// Time each name is shown while randomizing
    pub randomize_interval_ms: u64,
    /// Number of names cycled through by one randomize run
    pub randomize_steps: usize,
}

impl Default for SelectionTiming {
    fn default() -> Self {
        Self {
            hover_delay_ms: 500,
            hover_grace_ms: 200,
            randomize_interval_ms: 120,
            randomize_steps: 5,
        }
    }
}

impl<'de> Deserialize<'de> for SelectionTiming {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let defaults = Self::default();
        Ok(Self {
            hover_delay_ms: timing_field(&raw, "hover_delay_ms", defaults.hover_delay_ms),
            hover_grace_ms: timing_field(&raw, "hover_grace_ms", defaults.hover_grace_ms),
            randomize_interval_ms: timing_field(&raw, "randomize_interval_ms", defaults.randomize_interval_ms),
            randomize_steps: timing_field(&raw, "randomize_steps", defaults.randomize_steps),
        })
    }
}

fn timing_field<T: DeserializeOwned>(raw: &Value, key: &str, default: T) -> T {
    let Some(value) = raw.get(key) else {
        return default;
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(key, %err, "ignoring malformed timing field");
            default
        }
    }
}

impl SelectionTiming {
    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    pub fn hover_grace(&self) -> Duration {
        Duration::from_millis(self.hover_grace_ms)
    }

    pub fn randomize_interval(&self) -> Duration {
        Duration::from_millis(self.randomize_interval_ms)
    }
}

/// Ephemeral part of the selection state. The applied theme is kept alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    Idle,
    Previewing { preview: String },
    Comparing { comparing: String },
    Randomizing { shown: String },
}

/// Owner of the applied theme and every transient theme-related state.
pub struct ThemeSelection {
    registry: &'static ThemeRegistry,
    applied: String,
    mode: SelectionMode,
    timing: SelectionTiming,
    hover_delay: TimerSlot<String>,
    hover_grace: TimerSlot<()>,
    animation: TimerSlot<()>,
    randomize_queue: VecDeque<String>,
    rng: StdRng,
    document: DocumentState,
    pending_commit: Option<String>,
}

impl std::fmt::Debug for ThemeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSelection")
            .field("applied", &self.applied)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl ThemeSelection {
    /// Creates the state machine in `Idle(applied)`.
    ///
    /// An `applied` name missing from `registry` is replaced by the default theme.
    pub fn new(registry: &'static ThemeRegistry, applied: &str, rng: StdRng) -> Self {
        let applied = if registry.contains(applied) {
            applied.to_string()
        } else {
            tracing::debug!(theme = applied, "unknown initial theme, using default");
            theme::DEFAULT_THEME.to_string()
        };

        let mut document = DocumentState::new();
        document.apply_theme(&applied);

        Self {
            registry,
            applied,
            mode: SelectionMode::Idle,
            timing: SelectionTiming::default(),
            hover_delay: TimerSlot::new(),
            hover_grace: TimerSlot::new(),
            animation: TimerSlot::new(),
            randomize_queue: VecDeque::new(),
            rng,
            document,
            pending_commit: None,
        }
    }

    pub fn with_timing(mut self, timing: SelectionTiming) -> Self {
        self.timing = timing;
        self
    }

    // ===== Queries =====

    /// Name of the persisted theme.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn mode(&self) -> &SelectionMode {
        &self.mode
    }

    pub fn timing(&self) -> SelectionTiming {
        self.timing
    }

    pub fn preview(&self) -> Option<&str> {
        match &self.mode {
            SelectionMode::Previewing { preview } => Some(preview),
            _ => None,
        }
    }

    pub fn comparing(&self) -> Option<&str> {
        match &self.mode {
            SelectionMode::Comparing { comparing } => Some(comparing),
            _ => None,
        }
    }

    pub fn is_randomizing(&self) -> bool {
        matches!(self.mode, SelectionMode::Randomizing { .. })
    }

    /// Name of the theme the document should currently reflect.
    pub fn displayed(&self) -> &str {
        match &self.mode {
            SelectionMode::Previewing { preview } => preview,
            SelectionMode::Randomizing { shown } => shown,
            SelectionMode::Idle | SelectionMode::Comparing { .. } => &self.applied,
        }
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// True while a hover preview is scheduled but not yet shown.
    pub fn preview_pending(&self) -> bool {
        self.hover_delay.is_pending()
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.hover_delay.deadline(),
            self.hover_grace.deadline(),
            self.animation.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Returns the theme name that must be persisted, once per `select`.
    pub fn take_commit(&mut self) -> Option<String> {
        self.pending_commit.take()
    }

    // ===== Transitions =====

    /// Makes `name` the applied theme and returns to `Idle`.
    ///
    /// Cancels every pending preview, comparison and animation timer first so
    /// nothing scheduled earlier can override the choice.
    pub fn select(&mut self, name: &str) -> Result<(), ThemeError> {
        self.registry.require(name)?;
        self.cancel_timers();

        if self.applied != name {
            tracing::info!(theme = name, "theme applied");
        }
        self.applied = name.to_string();
        self.mode = SelectionMode::Idle;
        self.pending_commit = Some(self.applied.clone());
        self.refresh_document();
        Ok(())
    }

    /// Pointer entered the card for `name`.
    ///
    /// Starts the preview delay from `Idle`. Hovering a different card while a
    /// preview is active drops that preview before scheduling the new one;
    /// re-entering the previewed card cancels the pending revert.
    pub fn hover_start(&mut self, name: &str, now: Instant) -> Result<(), ThemeError> {
        self.registry.require(name)?;

        match &self.mode {
            SelectionMode::Idle => {}
            SelectionMode::Previewing { preview } if preview == name => {
                self.hover_grace.cancel();
                return Ok(());
            }
            SelectionMode::Previewing { .. } => {
                self.hover_grace.cancel();
                self.mode = SelectionMode::Idle;
                self.refresh_document();
            }
            SelectionMode::Comparing { .. } | SelectionMode::Randomizing { .. } => return Ok(()),
        }

        self.hover_delay
            .schedule(now, self.timing.hover_delay(), name.to_string());
        Ok(())
    }

    /// Pointer left the hovered card.
    pub fn hover_end(&mut self, now: Instant) {
        if self.hover_delay.cancel() {
            return;
        }
        if matches!(self.mode, SelectionMode::Previewing { .. }) {
            self.hover_grace.schedule(now, self.timing.hover_grace(), ());
        }
    }

    /// Enters comparison mode with a random candidate, or leaves it.
    pub fn toggle_compare(&mut self) {
        match &self.mode {
            SelectionMode::Comparing { .. } => {
                self.mode = SelectionMode::Idle;
                tracing::debug!("comparison closed");
            }
            SelectionMode::Randomizing { .. } => {}
            SelectionMode::Idle | SelectionMode::Previewing { .. } => {
                self.hover_delay.cancel();
                self.hover_grace.cancel();
                let applied = self.applied.clone();
                match self.pick_random(&[applied.as_str()]) {
                    Some(comparing) => {
                        tracing::debug!(theme = %comparing, "comparing against");
                        self.mode = SelectionMode::Comparing { comparing };
                    }
                    None => self.mode = SelectionMode::Idle,
                }
            }
        }
        self.refresh_document();
    }

    /// Replaces the comparison candidate with another random theme.
    pub fn shuffle_comparison(&mut self) {
        let SelectionMode::Comparing { comparing } = &self.mode else {
            return;
        };
        let exclude = [self.applied.clone(), comparing.clone()];
        if let Some(next) = self.pick_random(&[exclude[0].as_str(), exclude[1].as_str()]) {
            self.mode = SelectionMode::Comparing { comparing: next };
        }
    }

    /// Cycles through a few random themes, then applies the last one.
    pub fn randomize(&mut self, now: Instant) {
        self.cancel_timers();

        let steps = self.timing.randomize_steps.max(1);
        let applied = self.applied.as_str();
        let candidates: Vec<&str> = self
            .registry
            .names()
            .into_iter()
            .filter(|n| *n != applied)
            .collect();
        let mut picks: VecDeque<String> = candidates
            .choose_multiple(&mut self.rng, steps)
            .map(|n| n.to_string())
            .collect();

        let Some(first) = picks.pop_front() else {
            self.mode = SelectionMode::Idle;
            self.refresh_document();
            return;
        };
        tracing::debug!(steps = picks.len() + 1, "randomizing theme");

        self.randomize_queue = picks;
        self.mode = SelectionMode::Randomizing { shown: first };
        self.animation
            .schedule(now, self.timing.randomize_interval(), ());
        self.refresh_document();
    }

    /// Leaves the gallery view: drops preview/comparison/animation and all timers.
    pub fn leave_gallery(&mut self) {
        self.cancel_timers();
        if self.mode != SelectionMode::Idle {
            tracing::debug!("left gallery, reverting transient theme state");
            self.mode = SelectionMode::Idle;
            self.refresh_document();
        }
    }

    /// Fires every timer due at `now` and returns the next pending deadline.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        if let Some(name) = self.hover_delay.poll(now) {
            if self.mode == SelectionMode::Idle {
                self.mode = SelectionMode::Previewing { preview: name };
                self.refresh_document();
            }
        }

        if self.hover_grace.poll(now).is_some()
            && matches!(self.mode, SelectionMode::Previewing { .. })
        {
            self.mode = SelectionMode::Idle;
            self.refresh_document();
        }

        if self.animation.poll(now).is_some() {
            self.advance_randomize(now);
        }

        self.next_deadline()
    }

    // ===== Internals =====

    fn advance_randomize(&mut self, now: Instant) {
        let SelectionMode::Randomizing { shown } = &self.mode else {
            return;
        };

        match self.randomize_queue.pop_front() {
            Some(next) => {
                self.mode = SelectionMode::Randomizing { shown: next };
                self.animation
                    .schedule(now, self.timing.randomize_interval(), ());
                self.refresh_document();
            }
            None => {
                let last = shown.clone();
                // `last` came from the registry, so select cannot fail.
                if let Err(err) = self.select(&last) {
                    tracing::warn!(%err, "randomize produced an unknown theme");
                }
            }
        }
    }

    fn cancel_timers(&mut self) {
        self.hover_delay.cancel();
        self.hover_grace.cancel();
        self.animation.cancel();
        self.randomize_queue.clear();
    }

    fn pick_random(&mut self, exclude: &[&str]) -> Option<String> {
        let candidates: Vec<&str> = self
            .registry
            .names()
            .into_iter()
            .filter(|n| !exclude.contains(n))
            .collect();
        candidates.choose(&mut self.rng).map(|n| n.to_string())
    }

    fn refresh_document(&mut self) {
        let shown = self.displayed().to_string();
        self.document.apply_theme(&shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry;
    use rand::SeedableRng;

    fn selection(applied: &str) -> ThemeSelection {
        ThemeSelection::new(registry(), applied, StdRng::seed_from_u64(7))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_unknown_initial_theme_falls_back() {
        let sel = selection("does-not-exist");
        assert_eq!(sel.applied(), "dark");
        assert_eq!(sel.document().theme_name(), Some("dark"));
    }

    #[test]
    fn test_select_is_idempotent_for_every_theme() {
        for name in registry().names() {
            let mut sel = selection("dark");
            sel.select(name).unwrap();
            let doc = sel.document().clone();
            sel.select(name).unwrap();
            assert_eq!(sel.document(), &doc);
            assert_eq!(sel.applied(), name);
            assert_eq!(sel.mode(), &SelectionMode::Idle);
        }
    }

    #[test]
    fn test_select_unknown_leaves_state_untouched() {
        let mut sel = selection("nord");
        assert!(sel.select("zzz").is_err());
        assert_eq!(sel.applied(), "nord");
        assert_eq!(sel.take_commit(), None);
    }

    #[test]
    fn test_select_records_commit_once() {
        let mut sel = selection("dark");
        sel.select("sakura").unwrap();
        assert_eq!(sel.take_commit().as_deref(), Some("sakura"));
        assert_eq!(sel.take_commit(), None);
    }

    #[test]
    fn test_quick_mouse_through_never_previews() {
        let t0 = Instant::now();
        let mut sel = selection("dark");

        sel.hover_start("solaris", t0).unwrap();
        sel.tick(t0 + ms(100));
        sel.hover_end(t0 + ms(150));

        assert_eq!(sel.tick(t0 + ms(2_000)), None);
        assert_eq!(sel.mode(), &SelectionMode::Idle);
        assert_eq!(sel.document().theme_name(), Some("dark"));
    }

    #[test]
    fn test_hover_preview_activates_and_reverts_after_grace() {
        let t0 = Instant::now();
        let mut sel = selection("dark");

        sel.hover_start("solaris", t0).unwrap();
        sel.tick(t0 + ms(499));
        assert_eq!(sel.preview(), None);

        sel.tick(t0 + ms(500));
        assert_eq!(sel.preview(), Some("solaris"));
        assert_eq!(sel.document().theme_name(), Some("solaris"));
        assert!(!sel.document().is_dark());
        assert_eq!(sel.applied(), "dark");
        assert_eq!(sel.take_commit(), None);

        sel.hover_end(t0 + ms(800));
        sel.tick(t0 + ms(999));
        assert_eq!(sel.preview(), Some("solaris"));

        sel.tick(t0 + ms(1_000));
        assert_eq!(sel.mode(), &SelectionMode::Idle);
        assert_eq!(sel.document().theme_name(), Some("dark"));
    }

    #[test]
    fn test_reentering_previewed_card_keeps_preview() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.hover_start("nord", t0).unwrap();
        sel.tick(t0 + ms(500));
        sel.hover_end(t0 + ms(600));
        sel.hover_start("nord", t0 + ms(650)).unwrap();

        sel.tick(t0 + ms(5_000));
        assert_eq!(sel.preview(), Some("nord"));
    }

    #[test]
    fn test_last_hover_wins() {
        let t0 = Instant::now();
        let mut sel = selection("dark");

        sel.hover_start("sakura", t0).unwrap();
        sel.tick(t0 + ms(500));
        assert_eq!(sel.preview(), Some("sakura"));

        sel.hover_start("oceanic", t0 + ms(600)).unwrap();
        assert_eq!(sel.mode(), &SelectionMode::Idle);

        sel.tick(t0 + ms(1_099));
        assert_eq!(sel.preview(), None);
        sel.tick(t0 + ms(1_100));
        assert_eq!(sel.preview(), Some("oceanic"));
    }

    #[test]
    fn test_pending_hover_is_superseded() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.hover_start("sakura", t0).unwrap();
        sel.hover_start("cosmic", t0 + ms(300)).unwrap();

        sel.tick(t0 + ms(500));
        assert_eq!(sel.preview(), None);
        sel.tick(t0 + ms(800));
        assert_eq!(sel.preview(), Some("cosmic"));
    }

    #[test]
    fn test_select_cancels_pending_preview() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.hover_start("sakura", t0).unwrap();
        sel.select("nord").unwrap();

        assert_eq!(sel.tick(t0 + ms(1_000)), None);
        assert_eq!(sel.mode(), &SelectionMode::Idle);
        assert_eq!(sel.document().theme_name(), Some("nord"));
    }

    #[test]
    fn test_toggle_compare_twice_returns_to_idle() {
        let mut sel = selection("dark");
        sel.toggle_compare();
        let comparing = sel.comparing().map(str::to_string);
        assert!(comparing.is_some());
        assert_ne!(comparing.as_deref(), Some("dark"));

        sel.toggle_compare();
        assert_eq!(sel.mode(), &SelectionMode::Idle);
        assert_eq!(sel.comparing(), None);
        assert_eq!(sel.applied(), "dark");
    }

    #[test]
    fn test_shuffle_picks_a_new_distinct_candidate() {
        let mut sel = selection("dark");
        sel.toggle_compare();
        for _ in 0..20 {
            let before = sel.comparing().unwrap().to_string();
            sel.shuffle_comparison();
            let after = sel.comparing().unwrap();
            assert_ne!(after, before);
            assert_ne!(after, "dark");
        }
    }

    #[test]
    fn test_hover_is_ignored_while_comparing() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.toggle_compare();
        sel.hover_start("sakura", t0).unwrap();
        assert!(!sel.preview_pending());
        sel.tick(t0 + ms(1_000));
        assert!(sel.comparing().is_some());
    }

    #[test]
    fn test_randomize_cycles_then_selects_last_shown() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.randomize(t0);

        let mut seen = Vec::new();
        let mut now = t0;
        while sel.is_randomizing() {
            let shown = sel.displayed().to_string();
            assert_eq!(sel.document().theme_name(), Some(shown.as_str()));
            seen.push(shown);
            now += ms(120);
            sel.tick(now);
        }

        assert_eq!(seen.len(), 5);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert!(!seen.iter().any(|n| n == "dark"));

        let last = seen.last().unwrap();
        assert_eq!(sel.applied(), last);
        assert_eq!(sel.take_commit().as_deref(), Some(last.as_str()));
        assert_eq!(sel.next_deadline(), None);
    }

    #[test]
    fn test_select_during_randomize_wins() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.randomize(t0);
        sel.tick(t0 + ms(120));
        sel.select("light").unwrap();

        sel.tick(t0 + ms(5_000));
        assert_eq!(sel.applied(), "light");
        assert_eq!(sel.document().theme_name(), Some("light"));
    }

    #[test]
    fn test_leave_gallery_resets_transient_state() {
        let t0 = Instant::now();
        let mut sel = selection("dark");
        sel.hover_start("sakura", t0).unwrap();
        sel.tick(t0 + ms(500));
        sel.leave_gallery();
        assert_eq!(sel.mode(), &SelectionMode::Idle);
        assert_eq!(sel.document().theme_name(), Some("dark"));

        sel.toggle_compare();
        sel.leave_gallery();
        assert_eq!(sel.comparing(), None);

        sel.randomize(t0);
        sel.leave_gallery();
        assert_eq!(sel.next_deadline(), None);
        assert_eq!(sel.applied(), "dark");
        assert_eq!(sel.take_commit(), None);
    }

    #[test]
    fn test_timing_deserializes_with_defaults() {
        let timing: SelectionTiming = serde_json::from_str(r#"{"hover_delay_ms": 300}"#).unwrap();
        assert_eq!(timing.hover_delay(), ms(300));
        assert_eq!(timing.hover_grace(), ms(200));
        assert_eq!(timing.randomize_steps, 5);
    }

    #[test]
    fn test_timing_keeps_valid_fields_next_to_malformed_ones() {
        let timing: SelectionTiming = serde_json::from_str(
            r#"{"hover_delay_ms": 250, "hover_grace_ms": "oops", "randomize_steps": -3}"#,
        )
        .unwrap();
        assert_eq!(timing.hover_delay_ms, 250);
        assert_eq!(timing.hover_grace_ms, 200);
        assert_eq!(timing.randomize_interval_ms, 120);
        assert_eq!(timing.randomize_steps, 5);

        let timing: SelectionTiming = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(timing, SelectionTiming::default());
    }
}
