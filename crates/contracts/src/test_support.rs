//! Test doubles shared by the domain tests.

use std::cell::RefCell;

use crate::domain::b001_page::{PageMapping, PageRegistry};
use crate::domain::b005_book::BookController;
use crate::shared::animation::{AnimTarget, AnimationEngine, Props, ScrollRange, Tween};
use crate::shared::schedule::Scheduled;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Set(AnimTarget, Props),
    Tween(AnimTarget, Props, Tween),
    BindToScroll(AnimTarget, Props, ScrollRange),
    ClearScrollBindings,
    Refresh,
    ScrollTo(f64, Tween),
    SetPaused(bool),
}

/// Records every engine command in order.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: RefCell<Vec<EngineCall>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn push(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl AnimationEngine for RecordingEngine {
    fn set(&self, target: AnimTarget, props: &Props) {
        self.push(EngineCall::Set(target, *props));
    }

    fn tween(&self, target: AnimTarget, props: &Props, tween: Tween) {
        self.push(EngineCall::Tween(target, *props, tween));
    }

    fn bind_to_scroll(&self, target: AnimTarget, props: &Props, range: ScrollRange) {
        self.push(EngineCall::BindToScroll(target, *props, range));
    }

    fn clear_scroll_bindings(&self) {
        self.push(EngineCall::ClearScrollBindings);
    }

    fn refresh(&self) {
        self.push(EngineCall::Refresh);
    }

    fn scroll_to(&self, offset: f64, tween: Tween) {
        self.push(EngineCall::ScrollTo(offset, tween));
    }

    fn set_paused(&self, paused: bool) {
        self.push(EngineCall::SetPaused(paused));
    }
}

/// The eleven pages as the markup renders them.
pub fn portfolio_registry() -> PageRegistry {
    let mapping = PageMapping::portfolio();
    let ids: Vec<Option<String>> = mapping
        .rows()
        .iter()
        .map(|row| Some(row.page_id.as_str().to_string()))
        .collect();
    PageRegistry::from_page_ids(ids, &mapping)
}

/// Manually advanced clock for [`Scheduled`] tasks.
#[derive(Debug, Default)]
pub struct FakeClock {
    now_ms: u64,
    seq: u64,
    pending: Vec<(u64, u64, Scheduled)>,
}

impl FakeClock {
    pub fn schedule(&mut self, tasks: Vec<Scheduled>) {
        for task in tasks {
            self.seq += 1;
            self.pending
                .push((self.now_ms + u64::from(task.delay_ms), self.seq, task));
        }
    }

    /// Move time forward, firing due tasks in order along with anything they schedule.
    pub fn advance<E: AnimationEngine>(&mut self, book: &mut BookController<E>, ms: u64) {
        let until = self.now_ms + ms;
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= until)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(i, _)| i);
            let Some(i) = next else { break };

            let (due, _, task) = self.pending.remove(i);
            self.now_ms = due;
            let follow_up = book.fire(task.task);
            self.schedule(follow_up);
        }
        self.now_ms = until;
    }
}
