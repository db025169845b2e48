//! The flying content overlay: one renderer for every content table.

use contracts::domain::b003_flying_content::{
    GlossaryEntry, OverlayBody, OverlayContent, OverlayPhase, Section, TopicKey,
};
use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_book, BookContext};

/// Click handler for a markup element carrying the topic attribute `name="value"`.
///
/// The attribute is parsed once, when the page renders.
pub fn open_topic_on_click(
    ctx: BookContext,
    name: &'static str,
    value: &'static str,
) -> impl Fn(ev::MouseEvent) + 'static {
    let topic = match TopicKey::from_attribute(name, value) {
        Ok(topic) => Some(topic),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    };
    move |_| {
        if let Some(topic) = &topic {
            ctx.open_topic(topic);
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FlyingContentOverlay() -> impl IntoView {
    let ctx = use_book();

    let is_active = move || ctx.overlay_phase.get() != OverlayPhase::Closed;

    // Clicks on the panel itself must not reach the backdrop
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            id="flyingContentOverlay"
            class="flying-content-overlay"
            class:active=is_active
            on:click=move |_| ctx.close_overlay()
        >
            <div id="flyingContent" class="flying-content" on:click=stop_propagation>
                <button
                    id="closeFlyingBtn"
                    class="close-flying-btn"
                    aria-label="Close"
                    on:click=move |_| ctx.close_overlay()
                >
                    "×"
                </button>
                {move || ctx.overlay_content.get().map(|content| render_content(ctx, content))}
            </div>
        </div>
    }
}

fn render_content(ctx: BookContext, content: OverlayContent) -> impl IntoView {
    let prefix = content.style.class_prefix();
    let body = match content.body {
        OverlayBody::Bullets(items) => view! {
            <ul class=format!("{prefix}-list")>
                {items
                    .into_iter()
                    .map(|item| view! { <li class=format!("{prefix}-item")>{item}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        OverlayBody::Sections(sections) => sections
            .into_iter()
            .map(|section| render_section(prefix, section))
            .collect_view()
            .into_any(),
        OverlayBody::Glossary(entries) => view! {
            <div class="flying-glossary-list">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| render_glossary_entry(ctx, index, entry))
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=format!("{prefix}-content")>
            <h2 class=format!("{prefix}-title")>{content.title}</h2>
            {body}
            {content
                .footer
                .map(|footer| view! { <p class=format!("{prefix}-footer")>{footer}</p> })}
        </div>
    }
}

fn render_section(prefix: &'static str, section: Section) -> impl IntoView {
    view! {
        <div class=format!("{prefix}-section")>
            {section.heading.map(|heading| view! { <h3 class=format!("{prefix}-heading")>{heading}</h3> })}
            {section.text.map(|text| view! { <p class=format!("{prefix}-text")>{text}</p> })}
            {section
                .detail
                .map(|detail| {
                    view! {
                        <p class=format!("{prefix}-detail")>
                            <strong>{detail.label}</strong>
                            " "
                            {detail.text}
                        </p>
                    }
                })}
            {(!section.links.is_empty())
                .then(|| {
                    view! {
                        <div class=format!("{prefix}-links")>
                            {section
                                .links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            class=format!("{prefix}-link")
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

fn render_glossary_entry(ctx: BookContext, index: usize, entry: GlossaryEntry) -> impl IntoView {
    view! {
        <div
            class="flying-glossary-item"
            data-target-page=entry.page_id.to_string()
            on:click=move |_| ctx.select_glossary_entry(index)
        >
            <span class="flying-glossary-text">{entry.text}</span>
            <span class="flying-glossary-page">{entry.page_label}</span>
        </div>
    }
}
