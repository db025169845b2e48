//! Deferred work.
//!
//! Operations that need a follow-up after a delay (navigation settle, overlay transition
//! end, glossary navigation) return [`Scheduled`] values. The caller owns the clock: the
//! browser runs them on a timer, tests on a fake clock. Either way the task comes back
//! through `BookController::fire`.

use crate::domain::b001_page::PageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Page flip finished; clear the animating flag and announce the page.
    SettleNavigation,
    /// Overlay entrance transition finished.
    OverlayEntered { generation: u64 },
    /// Overlay exit transition finished.
    OverlayExited { generation: u64 },
    /// Navigate once the overlay is out of the way.
    NavigateToPage(PageId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub task: Deferred,
}

impl Scheduled {
    pub fn after(delay_ms: u32, task: Deferred) -> Self {
        Self { delay_ms, task }
    }
}
