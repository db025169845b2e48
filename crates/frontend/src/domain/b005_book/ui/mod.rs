//! The book itself: pages, overlays, banners and the startup wiring.

use contracts::domain::b001_page::{PageMapping, PageRegistry};
use contracts::domain::b003_flying_content::ContentCatalog;
use contracts::domain::b005_book::{shows_glossary_hint, BookController};
use contracts::shared::config::BookConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, Window};

use crate::domain::b001_page::ui::BookPages;
use crate::domain::b002_navigation::ui::MobileNav;
use crate::domain::b003_flying_content::ui::FlyingContentOverlay;
use crate::layout::global_context::{use_book, BookContext};
use crate::shared::config::load_config;
use crate::shared::dom;
use crate::shared::gsap::GsapEngine;

#[component]
#[allow(non_snake_case)]
pub fn Book() -> impl IntoView {
    let ctx = use_book();

    // Runs once the markup is mounted; the engine needs the rendered pages.
    Effect::new(move |_| {
        if ctx.is_started() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::warn!("no document, book stays inert");
            return;
        };
        start_book(ctx, &window, &document);
    });

    Effect::new(move |_| {
        let opened = ctx.book_opened.get();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            dom::set_body_class(&document, "book-open", opened);
        }
    });

    view! {
        <div class="background-overlay" class:active=move || ctx.book_opened.get()></div>
        <InstructionsOverlay />
        <div class="book">
            <BookPages />
        </div>
        <MobileNav />
        <FlyingContentOverlay />
    }
}

#[component]
#[allow(non_snake_case)]
fn InstructionsOverlay() -> impl IntoView {
    let ctx = use_book();

    view! {
        <div id="instructionsOverlay" class="instructions-overlay" class:hidden=move || ctx.book_opened.get()>
            <p id="mainInstruction" class="main-instruction">
                {move || {
                    if ctx.is_mobile.get() {
                        "Tap the arrows to turn the pages"
                    } else {
                        "Scroll to open the book"
                    }
                }}
            </p>
        </div>
        <p
            id="glossaryInstruction"
            class="glossary-instruction"
            class:show=move || shows_glossary_hint(ctx.current_page_id.get().as_ref())
        >
            "Click the contents for a quick glossary, double click to jump"
        </p>
    }
}

fn start_book(ctx: BookContext, window: &Window, document: &Document) {
    let config = load_config(document).unwrap_or_else(|err| {
        log::warn!("book config rejected, using defaults: {err:#}");
        BookConfig::default()
    });

    let mapping = PageMapping::portfolio();
    let registry = PageRegistry::from_page_ids(dom::page_ids(document), &mapping);
    let catalog = ContentCatalog::portfolio();

    let (topics, mut problems) = dom::topic_keys(document);
    problems.extend(catalog.validate(&topics));

    let book = BookController::new(
        config,
        GsapEngine::from_document(document),
        registry,
        mapping,
        catalog,
        dom::viewport(window),
    );
    problems.extend(book.validate());
    for problem in &problems {
        log::warn!("{problem}");
    }

    ctx.attach(book);
    ctx.on_scroll(dom::scroll_y(window));
    install_listeners(ctx, window, document);
    log::info!("book ready");
}

fn install_listeners(ctx: BookContext, window: &Window, document: &Document) {
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        ctx.on_scroll(dom::scroll_y(&scroll_window));
    });

    let resize_window = window.clone();
    dom::listen(window, "resize", move |_| {
        ctx.on_resize(dom::viewport(&resize_window));
    });

    let visibility_document = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        ctx.on_visibility_change(visibility_document.hidden());
    });

    dom::listen(window, "keydown", move |event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                ctx.close_overlay();
            }
        }
    });
}
