//! State management modules for the showcase.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (selection state machine, favorites)
//! - Gallery state (search query, category chip, hovered card)
//! - FAQ state (expanded troubleshooting items)
//! - Reveal state (scroll-triggered feature card animations)
//! - Navigation state (scroll position, mobile menu, pending jumps)

mod theme_state;
mod gallery_state;
mod faq_state;
mod reveal_state;
mod nav_state;

pub use theme_state::{palette_or_default, ThemeState};
pub use gallery_state::{GalleryState, HoverChange};
pub use faq_state::FaqState;
pub use reveal_state::RevealState;
pub use nav_state::{NavState, COMPACT_WIDTH};
