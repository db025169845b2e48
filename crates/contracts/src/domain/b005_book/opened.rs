//! The "book opened" signal that drives the background treatment.

use crate::shared::config::BookOpenedConfig;

/// Hysteresis on the scroll position, so hovering around the cover edge does not flicker.
///
/// Opens once the scroll passes `open_fraction` of the viewport height and closes only once
/// it falls below `close_fraction`; anything in between keeps the previous value.
#[derive(Debug, Clone, PartialEq)]
pub struct BookOpenedTracker {
    opened: bool,
    open_fraction: f64,
    close_fraction: f64,
}

impl BookOpenedTracker {
    pub fn new(config: &BookOpenedConfig) -> Self {
        Self {
            opened: false,
            open_fraction: config.open_fraction,
            close_fraction: config.close_fraction,
        }
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Scroll-driven rule. Returns the new value when it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> Option<bool> {
        if !self.opened && scroll_y > viewport_height * self.open_fraction {
            self.opened = true;
            return Some(true);
        }
        if self.opened && scroll_y < viewport_height * self.close_fraction {
            self.opened = false;
            return Some(false);
        }
        None
    }

    /// Page-driven rule for tap navigation: open on any page past the cover.
    pub fn observe_page(&mut self, index: usize) -> Option<bool> {
        let opened = index > 0;
        if opened == self.opened {
            return None;
        }
        self.opened = opened;
        Some(opened)
    }
}
