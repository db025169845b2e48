use contracts::domain::b001_page::PageId;
use contracts::domain::b002_navigation::NavigationView;
use contracts::domain::b003_flying_content::{OverlayContent, OverlayPhase, TopicKey};
use contracts::domain::b005_book::{BookController, Viewport};
use contracts::shared::events::{BookEvent, ModeFilter};
use contracts::shared::schedule::Scheduled;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen_futures::spawn_local;

use crate::shared::gsap::GsapEngine;

type Controller = BookController<GsapEngine>;

/// Reactive mirror of the book controller, shared through the Leptos context.
///
/// Components read the signals; every command goes through the controller, which is only
/// ever borrowed for the duration of one call.
#[derive(Clone, Copy)]
pub struct BookContext {
    pub view: RwSignal<NavigationView>,
    pub current_page_id: RwSignal<Option<PageId>>,
    pub book_opened: RwSignal<bool>,
    pub is_mobile: RwSignal<bool>,
    pub overlay_phase: RwSignal<OverlayPhase>,
    pub overlay_content: RwSignal<Option<OverlayContent>>,
    controller: StoredValue<Option<Controller>, LocalStorage>,
}

impl BookContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(NavigationView::default()),
            current_page_id: RwSignal::new(None),
            book_opened: RwSignal::new(false),
            is_mobile: RwSignal::new(false),
            overlay_phase: RwSignal::new(OverlayPhase::Closed),
            overlay_content: RwSignal::new(None),
            controller: StoredValue::new_local(None),
        }
    }

    pub fn is_started(&self) -> bool {
        self.controller.with_value(Option::is_some)
    }

    /// Take ownership of a freshly built controller and mirror its state.
    pub fn attach(&self, mut book: Controller) {
        let this = *self;
        book.subscribe(ModeFilter::Any, move |event| this.apply(event));
        book.start();

        self.is_mobile.set(book.is_mobile());
        self.current_page_id.set(book.current_page_id().cloned());
        self.controller.set_value(Some(book));
        self.sync();
    }

    fn apply(&self, event: &BookEvent) {
        leptos::logging::log!("book event: {:?}", event);
        match event {
            BookEvent::PageChanged { page_id, .. } => self.current_page_id.set(page_id.clone()),
            BookEvent::BookOpened(opened) => self.book_opened.set(*opened),
            BookEvent::ModeChanged { mobile } => self.is_mobile.set(*mobile),
            BookEvent::OverlayChanged { phase } => self.overlay_phase.set(*phase),
        }
    }

    /// Run one controller command, refresh the mirrored view and start its timers.
    fn dispatch(&self, command: impl FnOnce(&mut Controller) -> Vec<Scheduled>) {
        let scheduled = self
            .controller
            .try_update_value(|slot| slot.as_mut().map(command))
            .flatten()
            .unwrap_or_default();
        self.sync();
        self.schedule(scheduled);
    }

    fn sync(&self) {
        let snapshot = self.controller.with_value(|slot| {
            slot.as_ref()
                .map(|book| (book.view(), book.overlay().content().cloned()))
        });
        if let Some((view, content)) = snapshot {
            if view != self.view.get_untracked() {
                self.view.set(view);
            }
            if content != self.overlay_content.get_untracked() {
                self.overlay_content.set(content);
            }
        }
    }

    fn schedule(&self, tasks: Vec<Scheduled>) {
        for Scheduled { delay_ms, task } in tasks {
            let this = *self;
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                this.dispatch(move |book| book.fire(task));
            });
        }
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn previous(&self) {
        self.dispatch(|book| book.previous());
    }

    pub fn next(&self) {
        self.dispatch(|book| book.next());
    }

    pub fn navigate_to_page(&self, page_id: &str) {
        self.dispatch(|book| book.navigate_to_page_by_id(page_id));
    }

    pub fn open_topic(&self, topic: &TopicKey) {
        self.dispatch(|book| book.open_topic(topic));
    }

    pub fn close_overlay(&self) {
        self.dispatch(|book| book.close_overlay());
    }

    pub fn select_glossary_entry(&self, index: usize) {
        self.dispatch(|book| book.select_glossary_entry(index));
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        self.dispatch(|book| {
            book.on_scroll(scroll_y);
            Vec::new()
        });
    }

    pub fn on_resize(&self, viewport: Viewport) {
        self.dispatch(|book| {
            book.on_resize(viewport);
            Vec::new()
        });
    }

    pub fn on_visibility_change(&self, hidden: bool) {
        self.dispatch(|book| {
            book.on_visibility_change(hidden);
            Vec::new()
        });
    }
}

impl Default for BookContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_book() -> BookContext {
    use_context::<BookContext>().expect("BookContext not provided in context (provide it in App)")
}
