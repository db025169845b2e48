//! Book controller.
//!
//! Constructed once at startup and handed to every event handler. It owns the navigation
//! coordinator, the overlay presenter, the responsive switch and the book-opened tracker,
//! drives the animation engine, and publishes [`BookEvent`]s. Deferred follow-ups are
//! returned as [`Scheduled`] tasks and come back through [`BookController::fire`].

use super::opened::BookOpenedTracker;
use crate::domain::b001_page::{PageId, PageMapping, PageRegistry};
use crate::domain::b002_navigation::scroll;
use crate::domain::b002_navigation::{NavigationCoordinator, NavigationState, NavigationView};
use crate::domain::b003_flying_content::{ContentCatalog, OverlayPhase, OverlayPresenter, TopicKey};
use crate::domain::b004_responsive::ResponsiveSwitch;
use crate::error::BookError;
use crate::shared::animation::AnimationEngine;
use crate::shared::config::BookConfig;
use crate::shared::events::{BookEvent, EventBus, ModeFilter, SubscriptionId};
use crate::shared::schedule::{Deferred, Scheduled};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub struct BookController<E: AnimationEngine> {
    config: BookConfig,
    engine: E,
    nav: NavigationCoordinator,
    overlay: OverlayPresenter,
    catalog: ContentCatalog,
    responsive: ResponsiveSwitch,
    opened: BookOpenedTracker,
    bus: EventBus,
    viewport: Viewport,
    scroll_y: f64,
    scroll_bound: bool,
}

impl<E: AnimationEngine> BookController<E> {
    pub fn new(
        config: BookConfig,
        engine: E,
        registry: PageRegistry,
        mapping: PageMapping,
        catalog: ContentCatalog,
        viewport: Viewport,
    ) -> Self {
        let responsive = ResponsiveSwitch::new(config.viewport.mobile_breakpoint_px, viewport.width);
        let nav = NavigationCoordinator::new(registry, mapping, config.clone(), responsive.is_mobile());
        Self {
            overlay: OverlayPresenter::new(config.timing.clone()),
            opened: BookOpenedTracker::new(&config.book_opened),
            config,
            engine,
            nav,
            catalog,
            responsive,
            bus: EventBus::new(),
            viewport,
            scroll_y: 0.0,
            scroll_bound: false,
        }
    }

    /// Lay the pages out and, on desktop, bind them to the scroll track.
    pub fn start(&mut self) {
        if self.is_mobile() {
            self.nav.apply_initial_layout(&self.engine);
        } else {
            self.bind_scroll_track();
        }
        log::info!(
            "book started: {} pages, {} mode",
            self.nav.total(),
            if self.is_mobile() { "mobile" } else { "desktop" }
        );
    }

    /// Startup consistency checks of the mapping against the rendered pages.
    pub fn validate(&self) -> Vec<BookError> {
        self.nav.mapping().validate(self.nav.registry())
    }

    pub fn subscribe(
        &mut self,
        filter: ModeFilter,
        listener: impl Fn(&BookEvent) + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(filter, listener)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn navigation(&self) -> NavigationState {
        self.nav.state()
    }

    pub fn view(&self) -> NavigationView {
        self.nav.view()
    }

    pub fn current_page_id(&self) -> Option<&PageId> {
        self.nav.current_page_id()
    }

    pub fn overlay(&self) -> &OverlayPresenter {
        &self.overlay
    }

    pub fn is_mobile(&self) -> bool {
        self.nav.state().is_mobile
    }

    pub fn book_opened(&self) -> bool {
        self.opened.is_opened()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn go_to_page(&mut self, index: usize) -> Vec<Scheduled> {
        self.nav.go_to_page(index, &self.engine).into_iter().collect()
    }

    pub fn previous(&mut self) -> Vec<Scheduled> {
        self.nav.previous(&self.engine).into_iter().collect()
    }

    pub fn next(&mut self) -> Vec<Scheduled> {
        self.nav.next(&self.engine).into_iter().collect()
    }

    pub fn navigate_to_page_by_id(&mut self, page_id: &str) -> Vec<Scheduled> {
        self.nav
            .navigate_to_page_by_id(page_id, self.viewport.height, &self.engine)
            .into_iter()
            .collect()
    }

    /// Scroll-position update from the window.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        if self.is_mobile() {
            return;
        }

        self.track_scroll_page();

        if let Some(opened) = self.opened.observe_scroll(scroll_y, self.viewport.height) {
            self.publish(BookEvent::BookOpened(opened));
        }
    }

    // ------------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------------

    pub fn on_resize(&mut self, viewport: Viewport) {
        let height_changed = viewport.height != self.viewport.height;
        self.viewport = viewport;

        match self.responsive.observe(viewport.width) {
            Some(mobile) => self.switch_mode(mobile),
            None if !self.is_mobile() && height_changed => self.bind_scroll_track(),
            None => {}
        }
        self.engine.refresh();
    }

    fn switch_mode(&mut self, mobile: bool) {
        log::info!("switching to {} mode", if mobile { "mobile" } else { "desktop" });
        self.nav.set_mobile(mobile);
        self.publish(BookEvent::ModeChanged { mobile });

        if mobile {
            if self.scroll_bound {
                self.engine.clear_scroll_bindings();
                self.scroll_bound = false;
            }
            if self.nav.state().current_page > 0 {
                self.nav.hard_reset(&self.engine);
                self.announce_page(0);
            }
            let current = self.nav.state().current_page;
            if let Some(opened) = self.opened.observe_page(current) {
                self.publish(BookEvent::BookOpened(opened));
            }
        } else {
            self.bind_scroll_track();
        }
    }

    /// Rebuild the scroll-bound tweens from the resting layout, then follow the scroll position.
    fn bind_scroll_track(&mut self) {
        if self.scroll_bound {
            self.engine.clear_scroll_bindings();
        }
        // tweens take their start values from the pages as they are now
        self.nav.apply_initial_layout(&self.engine);
        let unit = self.config.scroll_unit(self.viewport.height);
        scroll::install_bindings(&self.engine, self.nav.total(), unit);
        self.scroll_bound = true;
        self.track_scroll_page();
    }

    fn track_scroll_page(&mut self) {
        let unit = self.config.scroll_unit(self.viewport.height);
        if let Some(index) = scroll::page_at_offset(self.scroll_y, unit, self.nav.total()) {
            if self.nav.update_current_page(index) {
                self.announce_page(index);
            }
        }
    }

    /// Pause every animation while the document is hidden.
    pub fn on_visibility_change(&mut self, hidden: bool) {
        self.engine.set_paused(hidden);
    }

    // ------------------------------------------------------------------------
    // Overlay
    // ------------------------------------------------------------------------

    pub fn open_topic(&mut self, topic: &TopicKey) -> Vec<Scheduled> {
        let Some(table) = self.catalog.table(topic.table) else {
            return Vec::new();
        };
        let before = self.overlay.phase();
        let scheduled = self.overlay.open(&topic.key, table, &self.engine);
        self.announce_overlay(before);
        scheduled.into_iter().collect()
    }

    pub fn close_overlay(&mut self) -> Vec<Scheduled> {
        let before = self.overlay.phase();
        let scheduled = self.overlay.close(&self.engine);
        self.announce_overlay(before);
        scheduled.into_iter().collect()
    }

    pub fn select_glossary_entry(&mut self, index: usize) -> Vec<Scheduled> {
        let before = self.overlay.phase();
        let scheduled = self.overlay.select_glossary_entry(index, &self.engine);
        self.announce_overlay(before);
        scheduled
    }

    fn announce_overlay(&self, before: OverlayPhase) {
        let phase = self.overlay.phase();
        if phase != before {
            self.publish(BookEvent::OverlayChanged { phase });
        }
    }

    // ------------------------------------------------------------------------
    // Deferred work
    // ------------------------------------------------------------------------

    /// Run a task that was returned earlier, once its delay has elapsed.
    pub fn fire(&mut self, task: Deferred) -> Vec<Scheduled> {
        match task {
            Deferred::SettleNavigation => {
                if let Some(index) = self.nav.settle() {
                    self.announce_page(index);
                }
                Vec::new()
            }
            Deferred::OverlayEntered { generation } => {
                let before = self.overlay.phase();
                self.overlay.on_entered(generation);
                self.announce_overlay(before);
                Vec::new()
            }
            Deferred::OverlayExited { generation } => {
                let before = self.overlay.phase();
                self.overlay.on_exited(generation);
                self.announce_overlay(before);
                Vec::new()
            }
            Deferred::NavigateToPage(page_id) => self.navigate_to_page_by_id(page_id.as_str()),
        }
    }

    fn announce_page(&mut self, index: usize) {
        let page_id = self.nav.registry().page_id(index).cloned();
        self.publish(BookEvent::PageChanged { index, page_id });

        // tap navigation has no scroll position, so the page decides
        if self.is_mobile() {
            if let Some(opened) = self.opened.observe_page(index) {
                self.publish(BookEvent::BookOpened(opened));
            }
        }
    }

    fn publish(&self, event: BookEvent) {
        self.bus.publish(&event, self.is_mobile());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b003_flying_content::ContentTableId;
    use crate::shared::animation::{AnimTarget, Props};
    use crate::test_support::{portfolio_registry, EngineCall, FakeClock, RecordingEngine};
    use std::cell::RefCell;
    use std::rc::Rc;

    const DESKTOP: Viewport = Viewport { width: 1280.0, height: 1000.0 };
    const MOBILE: Viewport = Viewport { width: 390.0, height: 1000.0 };

    fn controller(viewport: Viewport) -> BookController<RecordingEngine> {
        let mut book = BookController::new(
            BookConfig::default(),
            RecordingEngine::default(),
            portfolio_registry(),
            PageMapping::portfolio(),
            ContentCatalog::portfolio(),
            viewport,
        );
        book.start();
        book.engine().clear();
        book
    }

    fn record_events(book: &mut BookController<RecordingEngine>) -> Rc<RefCell<Vec<BookEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        book.subscribe(ModeFilter::Any, move |e| sink.borrow_mut().push(e.clone()));
        events
    }

    fn page_changes(events: &[BookEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|e| match e {
                BookEvent::PageChanged { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_binds_scroll_track_on_desktop_only() {
        let mut desktop = BookController::new(
            BookConfig::default(),
            RecordingEngine::default(),
            portfolio_registry(),
            PageMapping::portfolio(),
            ContentCatalog::portfolio(),
            DESKTOP,
        );
        desktop.start();
        let binds = |calls: &[EngineCall]| {
            calls
                .iter()
                .filter(|c| matches!(c, EngineCall::BindToScroll(..)))
                .count()
        };
        assert_eq!(binds(&desktop.engine().calls()), 1 + 2 * 10);

        let mut mobile = BookController::new(
            BookConfig::default(),
            RecordingEngine::default(),
            portfolio_registry(),
            PageMapping::portfolio(),
            ContentCatalog::portfolio(),
            MOBILE,
        );
        mobile.start();
        assert_eq!(binds(&mobile.engine().calls()), 0);
        assert!(mobile.validate().is_empty());
    }

    #[test]
    fn test_scroll_page_updates_are_idempotent() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);

        // unit = 250px
        book.on_scroll(760.0);
        book.on_scroll(770.0);
        assert_eq!(page_changes(&events.borrow()), vec![3]);
        assert_eq!(book.navigation().current_page, 3);
    }

    #[test]
    fn test_page_changed_carries_page_id() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);
        book.on_scroll(260.0);
        assert!(events.borrow().contains(&BookEvent::PageChanged {
            index: 1,
            page_id: Some("contents".into()),
        }));
    }

    #[test]
    fn test_book_opened_hysteresis_through_scroll() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);

        let expected = [false, false, false, true, true, true, false];
        for (percent, want) in [10.0, 20.0, 25.0, 30.0, 20.0, 15.0, 10.0].iter().zip(expected) {
            book.on_scroll(DESKTOP.height * percent / 100.0);
            assert_eq!(book.book_opened(), want, "at {percent}%");
        }

        let toggles: Vec<bool> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                BookEvent::BookOpened(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(toggles, vec![true, false]);
    }

    #[test]
    fn test_discrete_navigation_settles_and_announces() {
        let mut book = controller(MOBILE);
        let events = record_events(&mut book);
        let mut clock = FakeClock::default();

        clock.schedule(book.go_to_page(2));
        assert!(book.navigation().is_animating);
        assert!(page_changes(&events.borrow()).is_empty());

        clock.advance(&mut book, 799);
        assert!(book.navigation().is_animating);

        clock.advance(&mut book, 1);
        assert!(!book.navigation().is_animating);
        assert_eq!(page_changes(&events.borrow()), vec![2]);
        assert!(book.book_opened());

        let view = book.view();
        assert!(!view.prev_disabled);
        assert!(!view.next_disabled);
        assert!(view.controls_visible);
    }

    #[test]
    fn test_at_most_one_flip_in_flight() {
        let mut book = controller(MOBILE);
        let mut clock = FakeClock::default();

        clock.schedule(book.go_to_page(2));
        let issued = book.engine().calls().len();

        assert!(book.go_to_page(6).is_empty());
        assert!(book.next().is_empty());
        assert_eq!(book.navigation().current_page, 2);
        assert_eq!(book.engine().calls().len(), issued);

        clock.advance(&mut book, 800);
        assert_eq!(book.next().len(), 1);
        assert_eq!(book.navigation().current_page, 3);
    }

    #[test]
    fn test_buttons_at_the_ends() {
        let mut book = controller(MOBILE);
        let mut clock = FakeClock::default();

        assert!(book.view().prev_disabled);
        clock.schedule(book.go_to_page(10));
        clock.advance(&mut book, 800);
        let view = book.view();
        assert!(view.next_disabled);
        assert!(!view.prev_disabled);
        assert_eq!(view.current_display, 10);
    }

    #[test]
    fn test_glossary_navigation_waits_for_close() {
        let mut book = controller(DESKTOP);
        let mut clock = FakeClock::default();

        clock.schedule(book.open_topic(&TopicKey::glossary()));
        clock.advance(&mut book, 800);
        assert_eq!(book.overlay().phase(), OverlayPhase::Open);
        book.engine().clear();

        // "About Me"
        clock.schedule(book.select_glossary_entry(1));
        let scrolls = |book: &BookController<RecordingEngine>| {
            book.engine()
                .calls()
                .into_iter()
                .filter(|c| matches!(c, EngineCall::ScrollTo(..)))
                .collect::<Vec<_>>()
        };

        clock.advance(&mut book, 500);
        assert_eq!(book.overlay().phase(), OverlayPhase::Closed);
        assert!(scrolls(&book).is_empty());

        clock.advance(&mut book, 99);
        assert!(scrolls(&book).is_empty());

        clock.advance(&mut book, 1);
        // (2 + 1) * 250px
        assert_eq!(scrolls(&book).len(), 1);
        assert!(matches!(scrolls(&book)[0], EngineCall::ScrollTo(offset, _) if offset == 750.0));

        clock.advance(&mut book, 5000);
        assert_eq!(scrolls(&book).len(), 1);
    }

    #[test]
    fn test_glossary_navigation_on_mobile_flips_after_delay() {
        let mut book = controller(MOBILE);
        let mut clock = FakeClock::default();

        clock.schedule(book.open_topic(&TopicKey::glossary()));
        clock.advance(&mut book, 800);
        clock.schedule(book.select_glossary_entry(4));

        clock.advance(&mut book, 599);
        assert_eq!(book.navigation().current_page, 0);
        assert!(!book.navigation().is_animating);

        clock.advance(&mut book, 1);
        assert_eq!(book.navigation().current_page, 5);
        assert!(book.navigation().is_animating);
    }

    #[test]
    fn test_overlay_phases_are_published() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);
        let mut clock = FakeClock::default();

        clock.schedule(book.open_topic(&TopicKey::new(ContentTableId::AboutMe, "location")));
        clock.advance(&mut book, 800);
        clock.schedule(book.close_overlay());
        clock.advance(&mut book, 500);

        let phases: Vec<OverlayPhase> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                BookEvent::OverlayChanged { phase } => Some(*phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                OverlayPhase::Opening,
                OverlayPhase::Open,
                OverlayPhase::Closing,
                OverlayPhase::Closed,
            ]
        );
    }

    #[test]
    fn test_unknown_topic_leaves_overlay_untouched() {
        let mut book = controller(DESKTOP);
        let mut clock = FakeClock::default();

        assert!(book
            .open_topic(&TopicKey::new(ContentTableId::SkillDetail, "juggling"))
            .is_empty());
        assert!(!book.overlay().is_active());
        assert!(book.overlay().content().is_none());

        clock.schedule(book.open_topic(&TopicKey::new(ContentTableId::SkillDetail, "soft-skills")));
        clock.advance(&mut book, 800);
        let before = book.overlay().content().cloned();

        assert!(book
            .open_topic(&TopicKey::new(ContentTableId::SkillDetail, "juggling"))
            .is_empty());
        assert_eq!(book.overlay().content().cloned(), before);
        assert!(book.overlay().is_active());
    }

    #[test]
    fn test_switch_to_mobile_resets_the_book() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);

        book.on_scroll(1300.0);
        assert_eq!(book.navigation().current_page, 5);
        book.engine().clear();

        book.on_resize(MOBILE);
        assert!(book.is_mobile());
        assert_eq!(book.navigation().current_page, 0);
        assert!(events.borrow().contains(&BookEvent::ModeChanged { mobile: true }));

        let calls = book.engine().calls();
        assert_eq!(calls[0], EngineCall::ClearScrollBindings);
        let sets: Vec<(usize, Props)> = calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Set(AnimTarget::Page(i), p) => Some((*i, *p)),
                _ => None,
            })
            .collect();
        assert_eq!(sets.len(), 11);
        for (index, props) in sets {
            let z = if index == 0 { 11.0 } else { -(index as f64) };
            assert_eq!(props, Props::new().rotate_y(0.0).z(z));
        }
        assert_eq!(calls.last(), Some(&EngineCall::Refresh));
        assert!(book.view().prev_disabled);
        assert!(!book.book_opened());
    }

    #[test]
    fn test_switch_to_mobile_announces_the_cover() {
        let mut book = controller(DESKTOP);
        let events = record_events(&mut book);

        book.on_scroll(260.0);
        assert_eq!(book.current_page_id().map(PageId::as_str), Some("contents"));

        book.on_resize(MOBILE);
        let last_page = events.borrow().iter().rev().find_map(|e| match e {
            BookEvent::PageChanged { page_id, .. } => Some(page_id.clone()),
            _ => None,
        });
        assert_eq!(last_page, Some(Some(PageId::from("cover"))));
        assert_eq!(book.current_page_id().map(PageId::as_str), Some("cover"));
    }

    #[test]
    fn test_switch_to_desktop_rebinds_from_resting_layout() {
        let mut book = controller(MOBILE);
        let events = record_events(&mut book);
        let mut clock = FakeClock::default();

        clock.schedule(book.go_to_page(5));
        clock.advance(&mut book, 800);
        book.engine().clear();

        book.on_resize(DESKTOP);
        let calls = book.engine().calls();
        let first_bind = calls
            .iter()
            .position(|c| matches!(c, EngineCall::BindToScroll(..)))
            .unwrap();
        let sets: Vec<usize> = calls[..first_bind]
            .iter()
            .filter_map(|c| match c {
                EngineCall::Set(AnimTarget::Page(i), _) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(sets, (0..11).collect::<Vec<_>>());
        assert!(!calls[first_bind..]
            .iter()
            .any(|c| matches!(c, EngineCall::Set(..))));

        // scroll position is still the top of the track
        assert_eq!(book.navigation().current_page, 0);
        assert_eq!(page_changes(&events.borrow()).last(), Some(&0));
    }

    #[test]
    fn test_switch_to_desktop_follows_scroll_position() {
        let mut book = controller(MOBILE);
        book.on_scroll(1300.0);
        assert_eq!(book.navigation().current_page, 0);

        book.on_resize(DESKTOP);
        assert_eq!(book.navigation().current_page, 5);
    }

    #[test]
    fn test_switch_to_mobile_on_cover_does_not_reset() {
        let mut book = controller(DESKTOP);
        book.on_resize(MOBILE);
        assert!(!book
            .engine()
            .calls()
            .iter()
            .any(|c| matches!(c, EngineCall::Set(AnimTarget::Page(_), _))));
    }

    #[test]
    fn test_switch_to_desktop_binds_scroll_track() {
        let mut book = controller(MOBILE);
        book.on_resize(DESKTOP);
        assert!(!book.is_mobile());
        assert!(book
            .engine()
            .calls()
            .iter()
            .any(|c| matches!(c, EngineCall::BindToScroll(..))));
        assert!(!book.view().controls_visible);
    }

    #[test]
    fn test_desktop_height_change_rebinds() {
        let mut book = controller(DESKTOP);
        book.on_resize(Viewport { width: 1280.0, height: 800.0 });
        let calls = book.engine().calls();
        assert_eq!(calls[0], EngineCall::ClearScrollBindings);
        assert!(calls.contains(&EngineCall::BindToScroll(
            AnimTarget::Book,
            Props::new().scale(1.0),
            crate::shared::animation::ScrollRange { start: 0.0, end: 200.0, scrub: Some(1.0) },
        )));
    }

    #[test]
    fn test_mobile_subscribers_only_hear_mobile_events() {
        let mut book = controller(DESKTOP);
        let heard = Rc::new(RefCell::new(0));
        let h = heard.clone();
        book.subscribe(ModeFilter::MobileOnly, move |_| *h.borrow_mut() += 1);

        book.on_scroll(600.0);
        assert_eq!(*heard.borrow(), 0);
    }

    #[test]
    fn test_visibility_pauses_engine() {
        let mut book = controller(DESKTOP);
        book.on_visibility_change(true);
        book.on_visibility_change(false);
        assert_eq!(
            book.engine().calls(),
            vec![EngineCall::SetPaused(true), EngineCall::SetPaused(false)]
        );
    }
}
