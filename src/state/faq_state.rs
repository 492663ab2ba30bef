//! Troubleshooting FAQ expansion state.
//!
//! Any subset of items may be expanded at the same time.

use std::collections::BTreeSet;

/// Tracks which FAQ items are expanded.
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    /// Indices of expanded items
    expanded: BTreeSet<usize>,
}

impl FaqState {
    /// Creates a new FAQ state with every item collapsed.
    pub fn new() -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }

    /// Returns true if the item at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Expands a collapsed item or collapses an expanded one.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }
}
