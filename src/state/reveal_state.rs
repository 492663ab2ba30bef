//! Scroll-triggered reveal animation for feature cards.
//!
//! A card is revealed the first time it scrolls into view and stays revealed.
//! Its fade-in is staggered by its index, mirroring a CSS transition delay.

use std::collections::HashMap;

/// Seconds between the start of consecutive card fades
pub const STAGGER_SECS: f64 = 0.1;
/// Seconds one card takes to fade in
pub const FADE_SECS: f64 = 0.6;

/// Reveal bookkeeping for a fixed list of cards.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    /// Card index -> time (egui seconds) it first became visible
    revealed_at: HashMap<usize, f64>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a card as revealed. Later calls keep the first reveal time.
    pub fn mark_visible(&mut self, index: usize, now: f64) {
        self.revealed_at.entry(index).or_insert(now);
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed_at.contains_key(&index)
    }

    /// Fade progress in `0.0..=1.0` for the card at `index`.
    pub fn progress(&self, index: usize, now: f64) -> f32 {
        let Some(start) = self.revealed_at.get(&index) else {
            return 0.0;
        };
        let elapsed = now - start - index as f64 * STAGGER_SECS;
        (elapsed / FADE_SECS).clamp(0.0, 1.0) as f32
    }

    /// True while any revealed card is still fading in.
    pub fn is_animating(&self, now: f64) -> bool {
        self.revealed_at
            .keys()
            .any(|&index| self.progress(index, now) < 1.0)
    }
}
