//! Header navigation state: scroll position, mobile menu and pending jumps.

use crate::content::Section;

/// Scroll offset beyond which the header becomes opaque
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Window width below which navigation collapses into a menu
pub const COMPACT_WIDTH: f32 = 720.0;

#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Vertical scroll offset of the page as of the last frame
    scroll_offset: f32,
    /// Whether the collapsed navigation menu is open
    menu_open: bool,
    /// Section to scroll to on the next frame
    scroll_target: Option<Section>,
    /// Whether the theme gallery was on screen last frame
    gallery_visible: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > SCROLLED_THRESHOLD
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // ===== Mutations =====

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Requests a jump to `section` and closes the menu.
    pub fn navigate_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.menu_open = false;
    }

    /// Consumes the pending jump if it targets `section`.
    pub fn take_scroll_target(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }

    /// Records gallery visibility; returns true when it just went off screen.
    pub fn update_gallery_visibility(&mut self, visible: bool) -> bool {
        let left = self.gallery_visible && !visible;
        self.gallery_visible = visible;
        left
    }
}
