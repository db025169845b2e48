//! Notifications published by the book controller.

use crate::domain::b001_page::PageId;
use crate::domain::b003_flying_content::OverlayPhase;

#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    /// The current page changed (after a flip settled, or the scroll crossed a page).
    PageChanged {
        index: usize,
        page_id: Option<PageId>,
    },
    /// The reader moved past the cover (or back onto it).
    BookOpened(bool),
    /// Viewport crossed the mobile breakpoint.
    ModeChanged { mobile: bool },
    /// The flying content overlay moved to another phase.
    OverlayChanged { phase: OverlayPhase },
}

/// Which interaction mode a subscriber cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFilter {
    Any,
    MobileOnly,
    DesktopOnly,
}

impl ModeFilter {
    pub fn accepts(&self, mobile: bool) -> bool {
        match self {
            ModeFilter::Any => true,
            ModeFilter::MobileOnly => mobile,
            ModeFilter::DesktopOnly => !mobile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&BookEvent)>;

/// Always-present notification channel.
///
/// Publishing never fails and never depends on who is listening; modes only decide which
/// subscribers get called.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, ModeFilter, Listener)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        filter: ModeFilter,
        listener: impl Fn(&BookEvent) + 'static,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, filter, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _, _)| *sid != id);
    }

    pub fn publish(&self, event: &BookEvent, mobile: bool) {
        for (_, filter, listener) in &self.listeners {
            if filter.accepts(mobile) {
                listener(event);
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
