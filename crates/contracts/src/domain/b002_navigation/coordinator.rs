//! Single source of truth for "which page is showing".
//!
//! Discrete (mobile) mode flips pages on command, one navigation at a time. Continuous
//! (desktop) mode follows the scroll position; the coordinator only records the page the
//! scroll track is on and converts page requests into smooth scrolls.
//!
//! Nothing here reports errors: a command with unmet preconditions does nothing.

use super::roles::{initial_transform, role_transform};
use super::scroll;
use crate::domain::b001_page::{PageId, PageMapping, PageRegistry};
use crate::shared::animation::{AnimTarget, AnimationEngine, Ease, Tween};
use crate::shared::config::BookConfig;
use crate::shared::schedule::{Deferred, Scheduled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_page: usize,
    pub is_animating: bool,
    pub is_mobile: bool,
}

/// What the page counter and the discrete navigation controls show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationView {
    pub current_display: usize,
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub controls_visible: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationCoordinator {
    registry: PageRegistry,
    mapping: PageMapping,
    config: BookConfig,
    state: NavigationState,
}

impl NavigationCoordinator {
    pub fn new(registry: PageRegistry, mapping: PageMapping, config: BookConfig, is_mobile: bool) -> Self {
        Self {
            registry,
            mapping,
            config,
            state: NavigationState {
                current_page: 0,
                is_animating: false,
                is_mobile,
            },
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn mapping(&self) -> &PageMapping {
        &self.mapping
    }

    pub fn total(&self) -> usize {
        self.registry.len()
    }

    pub fn current_page_id(&self) -> Option<&PageId> {
        self.registry.page_id(self.state.current_page)
    }

    pub fn view(&self) -> NavigationView {
        let current = self.state.current_page;
        let total = self.total();
        NavigationView {
            current_display: self.mapping.display_number(current),
            total,
            prev_disabled: current == 0,
            next_disabled: current + 1 >= total,
            controls_visible: self.state.is_mobile,
        }
    }

    /// Put every page in its resting position without animation.
    pub fn apply_initial_layout(&self, engine: &dyn AnimationEngine) {
        let total = self.total();
        for index in 0..total {
            engine.set(AnimTarget::Page(index), &initial_transform(index, total).props());
        }
    }

    /// Tap-driven flip to `target`.
    ///
    /// Dropped (not queued) while a flip is in flight, outside discrete mode, or for an
    /// index outside the book. Every page receives its tween before this returns; the
    /// returned task clears the animating flag once the flip has settled.
    pub fn go_to_page(&mut self, target: usize, engine: &dyn AnimationEngine) -> Option<Scheduled> {
        if !self.state.is_mobile {
            log::debug!("go_to_page({target}) ignored: continuous mode");
            return None;
        }
        if self.state.is_animating {
            log::debug!("go_to_page({target}) dropped: flip in flight");
            return None;
        }
        let total = self.total();
        if target >= total {
            log::debug!("go_to_page({target}) ignored: book has {total} pages");
            return None;
        }

        self.state.is_animating = true;
        self.state.current_page = target;
        log::info!(
            "navigating to page {target} ({})",
            self.current_page_id().map(PageId::as_str).unwrap_or("unknown")
        );

        let tween = Tween::new(self.config.timing.page_flip_ms, Ease::Power2InOut);
        for index in 0..total {
            let transform = role_transform(index, target, total);
            engine.tween(AnimTarget::Page(index), &transform.props(), tween);
        }

        Some(Scheduled::after(
            self.config.timing.settle_delay_ms,
            Deferred::SettleNavigation,
        ))
    }

    /// Finish the flip started by [`Self::go_to_page`]. Returns the page to announce.
    pub fn settle(&mut self) -> Option<usize> {
        if !self.state.is_animating {
            return None;
        }
        self.state.is_animating = false;
        Some(self.state.current_page)
    }

    pub fn previous(&mut self, engine: &dyn AnimationEngine) -> Option<Scheduled> {
        let current = self.state.current_page;
        if current == 0 {
            return None;
        }
        self.go_to_page(current - 1, engine)
    }

    pub fn next(&mut self, engine: &dyn AnimationEngine) -> Option<Scheduled> {
        let next = self.state.current_page + 1;
        if next >= self.total() {
            return None;
        }
        self.go_to_page(next, engine)
    }

    /// Scroll-driven page tracking. Returns `true` when the page actually changed.
    ///
    /// Called at scroll frequency, so the unchanged case does nothing at all.
    pub fn update_current_page(&mut self, index: usize) -> bool {
        if index == self.state.current_page || self.state.is_mobile || index >= self.total() {
            return false;
        }
        self.state.current_page = index;
        true
    }

    /// Registry index of a page id: mapping first, then the rendered pages.
    pub fn resolve_page_id(&self, page_id: &str) -> Option<usize> {
        self.mapping
            .by_page_id(page_id)
            .map(|row| row.array_index)
            .filter(|index| *index < self.total())
            .or_else(|| self.registry.index_of(page_id))
    }

    pub fn navigate_to_page_by_id(
        &mut self,
        page_id: &str,
        viewport_height: f64,
        engine: &dyn AnimationEngine,
    ) -> Option<Scheduled> {
        let Some(index) = self.resolve_page_id(page_id) else {
            log::debug!("navigate_to_page_by_id({page_id}) ignored: unknown page");
            return None;
        };
        self.navigate_to_index(index, viewport_height, engine)
    }

    /// Route a page request to the mode's navigation routine.
    pub fn navigate_to_index(
        &mut self,
        index: usize,
        viewport_height: f64,
        engine: &dyn AnimationEngine,
    ) -> Option<Scheduled> {
        if self.state.is_mobile {
            return self.go_to_page(index, engine);
        }
        let offset = scroll::offset_for_page(index, self.config.scroll_unit(viewport_height));
        engine.scroll_to(
            offset,
            Tween::new(self.config.timing.scroll_to_ms, Ease::Power2InOut),
        );
        None
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.state.is_mobile = mobile;
    }

    /// Back to the cover with no animation.
    pub fn hard_reset(&mut self, engine: &dyn AnimationEngine) {
        self.state.current_page = 0;
        self.apply_initial_layout(engine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::animation::Props;
    use crate::test_support::{portfolio_registry, EngineCall, RecordingEngine};

    fn coordinator(mobile: bool) -> NavigationCoordinator {
        NavigationCoordinator::new(
            portfolio_registry(),
            PageMapping::portfolio(),
            BookConfig::default(),
            mobile,
        )
    }

    #[test]
    fn test_go_to_page_tweens_every_page_once() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);

        let settle = nav.go_to_page(3, &engine);
        assert_eq!(settle, Some(Scheduled::after(800, Deferred::SettleNavigation)));
        assert!(nav.state().is_animating);
        assert_eq!(nav.state().current_page, 3);

        let calls = engine.calls();
        assert_eq!(calls.len(), 11);
        let flip = Tween::new(1500, Ease::Power2InOut);
        assert_eq!(
            calls[0],
            EngineCall::Tween(AnimTarget::Page(0), Props::new().rotate_y(-180.0).z(-1.0), flip)
        );
        assert_eq!(
            calls[3],
            EngineCall::Tween(AnimTarget::Page(3), Props::new().rotate_y(-180.0).z(111.0), flip)
        );
        assert_eq!(
            calls[4],
            EngineCall::Tween(AnimTarget::Page(4), Props::new().rotate_y(0.0).z(7.0), flip)
        );
    }

    #[test]
    fn test_second_command_while_animating_is_dropped() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);

        nav.go_to_page(2, &engine);
        let issued = engine.calls().len();

        assert_eq!(nav.go_to_page(5, &engine), None);
        assert_eq!(nav.state().current_page, 2);
        assert_eq!(engine.calls().len(), issued);

        assert_eq!(nav.settle(), Some(2));
        assert!(nav.go_to_page(5, &engine).is_some());
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range_and_desktop() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);
        assert_eq!(nav.go_to_page(11, &engine), None);

        let mut desktop = coordinator(false);
        assert_eq!(desktop.go_to_page(1, &engine), None);
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_button_state_after_settle() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);

        let view = nav.view();
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);

        for target in [4, 10, 0] {
            nav.go_to_page(target, &engine);
            nav.settle();
            let view = nav.view();
            assert_eq!(view.prev_disabled, target == 0);
            assert_eq!(view.next_disabled, target == 10);
            assert_eq!(view.current_display, target);
            assert_eq!(view.total, 11);
        }
    }

    #[test]
    fn test_previous_next_stay_in_bounds() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);
        assert_eq!(nav.previous(&engine), None);

        nav.go_to_page(10, &engine);
        nav.settle();
        assert_eq!(nav.next(&engine), None);
        assert!(nav.previous(&engine).is_some());
        assert_eq!(nav.state().current_page, 9);
    }

    #[test]
    fn test_update_current_page_is_idempotent() {
        let mut nav = coordinator(false);
        assert!(nav.update_current_page(3));
        assert!(!nav.update_current_page(3));
        assert!(!nav.update_current_page(42));
        assert_eq!(nav.state().current_page, 3);
    }

    #[test]
    fn test_update_current_page_ignored_in_discrete_mode() {
        let mut nav = coordinator(true);
        assert!(!nav.update_current_page(3));
        assert_eq!(nav.state().current_page, 0);
    }

    #[test]
    fn test_navigate_by_id_desktop_scrolls() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(false);

        assert_eq!(nav.navigate_to_page_by_id("about-me", 800.0, &engine), None);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::ScrollTo(600.0, Tween::new(1500, Ease::Power2InOut))]
        );
    }

    #[test]
    fn test_navigate_by_id_mobile_flips() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);

        assert!(nav.navigate_to_page_by_id("skills", 800.0, &engine).is_some());
        assert_eq!(nav.state().current_page, 4);
    }

    #[test]
    fn test_navigate_by_id_unknown_is_noop() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);
        assert_eq!(nav.navigate_to_page_by_id("blog", 800.0, &engine), None);
        assert_eq!(nav.state(), NavigationState { current_page: 0, is_animating: false, is_mobile: true });
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_registry() {
        let mapping = PageMapping::new(vec![]);
        let registry =
            PageRegistry::from_page_ids(vec![Some("cover"), Some("extras")], &mapping);
        let nav = NavigationCoordinator::new(registry, mapping, BookConfig::default(), true);
        assert_eq!(nav.resolve_page_id("extras"), Some(1));
        assert_eq!(nav.resolve_page_id("missing"), None);
    }

    #[test]
    fn test_hard_reset_restores_initial_layout() {
        let engine = RecordingEngine::default();
        let mut nav = coordinator(true);
        nav.go_to_page(5, &engine);
        nav.settle();
        engine.clear();

        nav.hard_reset(&engine);
        assert_eq!(nav.state().current_page, 0);
        let calls = engine.calls();
        assert_eq!(calls.len(), 11);
        assert_eq!(
            calls[0],
            EngineCall::Set(AnimTarget::Page(0), Props::new().rotate_y(0.0).z(11.0))
        );
        assert_eq!(
            calls[7],
            EngineCall::Set(AnimTarget::Page(7), Props::new().rotate_y(0.0).z(-7.0))
        );
    }
}
