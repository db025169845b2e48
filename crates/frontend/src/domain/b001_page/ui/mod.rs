//! Markup of the book pages.
//!
//! Every page is a `.book__page` carrying its `data-page-id`; click targets carry the topic
//! attribute the overlay opens from.

use contracts::domain::b001_page::PageMapping;
use contracts::domain::b003_flying_content::TopicKey;
use leptos::prelude::*;

use crate::domain::b003_flying_content::ui::open_topic_on_click;
use crate::layout::global_context::{use_book, BookContext};

const ABOUT_TOPICS: [(&str, &str); 8] = [
    ("web-development", "Web Development"),
    ("ui-design", "UI Design"),
    ("location", "Bangkok, Thailand"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("seo", "SEO"),
    ("clean-code", "Clean Code"),
    ("ux", "User Experience"),
];

const SKILL_TOPICS: [(&str, &str); 6] = [
    ("web-development", "Web Development"),
    ("backend-fullstack", "Back-End & Full Stack"),
    ("ui-ux-design", "UI/UX Design"),
    ("seo-optimization", "SEO & Optimization"),
    ("version-control", "Version Control & Workflow"),
    ("soft-skills", "Soft Skills"),
];

const PROJECT_TOPICS: [(&str, &str); 2] = [
    ("project-1", "Blog Website with Admin Dashboard"),
    ("project-2", "E-Commerce Shopify Website"),
];

const WEB_DEV_TOPICS: [(&str, &str); 5] = [
    ("frontend", "Frontend Development"),
    ("backend", "Backend Development"),
    ("fullstack", "Full-Stack Solutions"),
    ("responsive", "Responsive Design"),
    ("performance", "Performance Optimization"),
];

const DESIGN_TOPICS: [(&str, &str); 7] = [
    ("ui-ux", "UI/UX Design"),
    ("branding", "Branding"),
    ("graphic", "Graphic Design"),
    ("digital", "Digital Art"),
    ("print", "Print Design"),
    ("wireframes", "Wireframes"),
    ("visual", "Visual Identity"),
];

#[component]
#[allow(non_snake_case)]
pub fn BookPages() -> impl IntoView {
    let ctx = use_book();

    view! {
        <div class="book__page book__page--cover" data-page-id="cover">
            <div class="page__content cover">
                <h1 class="cover__title">"Portfolio"</h1>
                <p class="cover__subtitle">"Web Developer & UI Designer"</p>
            </div>
        </div>
        <div class="book__page" data-page-id="contents">
            <div class="page__content">
                <h2 class="page__title">"Contents"</h2>
                {contents(ctx)}
            </div>
        </div>
        <div class="book__page" data-page-id="about-me">
            <div class="page__content">
                <h2
                    class="page__title about-title-clickable"
                    data-page-content="about-me-full"
                    on:click=open_topic_on_click(ctx, "data-page-content", "about-me-full")
                >
                    "About Me"
                </h2>
                <p class="about-text">
                    {ABOUT_TOPICS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <span
                                    class="about-highlight"
                                    data-about-topic=key
                                    on:click=open_topic_on_click(ctx, "data-about-topic", key)
                                >
                                    {label}
                                </span>
                                " "
                            }
                        })
                        .collect_view()}
                </p>
            </div>
        </div>
        <div class="book__page" data-page-id="my-journey">
            <div class="page__content">
                <h2
                    class="page__title journey-title-clickable"
                    data-journey-content="my-journey-full"
                    on:click=open_topic_on_click(ctx, "data-journey-content", "my-journey-full")
                >
                    "My Journey"
                </h2>
                <p>"From curiosity to code."</p>
            </div>
        </div>
        <div class="book__page" data-page-id="skills">
            <div class="page__content">
                <h2
                    class="page__title skills-title-clickable"
                    data-skills-content="skills-full"
                    on:click=open_topic_on_click(ctx, "data-skills-content", "skills-full")
                >
                    "Skills"
                </h2>
                <ul class="skills-list">
                    {SKILL_TOPICS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <li
                                    class="skills-item"
                                    data-skill-topic=key
                                    on:click=open_topic_on_click(ctx, "data-skill-topic", key)
                                >
                                    {label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
        <div class="book__page" data-page-id="projects">
            <div class="page__content">
                <h2
                    class="page__title"
                    data-flying="projects"
                    on:click=open_topic_on_click(ctx, "data-flying", "projects")
                >
                    "Projects"
                </h2>
                {flying_list(ctx, "project-title", &PROJECT_TOPICS)}
            </div>
        </div>
        <div class="book__page" data-page-id="web-development">
            <div class="page__content">
                <h2
                    class="page__title"
                    data-flying="web-development"
                    on:click=open_topic_on_click(ctx, "data-flying", "web-development")
                >
                    "Web Development"
                </h2>
                {flying_list(ctx, "web-dev-item", &WEB_DEV_TOPICS)}
            </div>
        </div>
        <div class="book__page" data-page-id="design-portfolio">
            <div class="page__content">
                <h2
                    class="page__title"
                    data-target="design"
                    on:click=open_topic_on_click(ctx, "data-target", "design")
                >
                    "Design Portfolio"
                </h2>
                <div class="design-grid">
                    {DESIGN_TOPICS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <div
                                    class="design-item"
                                    data-design=key
                                    on:click=open_topic_on_click(ctx, "data-design", key)
                                >
                                    {label}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
        <div class="book__page" data-page-id="achievements">
            <div class="page__content">
                <h2 class="page__title">"Achievements"</h2>
                <p>"5+ years of freelance web development and design."</p>
            </div>
        </div>
        <div class="book__page" data-page-id="testimonials">
            <div class="page__content">
                <h2 class="page__title">"Testimonials"</h2>
                <blockquote>"Clear communication, on time, and a pleasure to work with."</blockquote>
            </div>
        </div>
        <div class="book__page" data-page-id="contact-links">
            <div class="page__content">
                <h2 class="page__title">"Contact & Links"</h2>
                <p>"Based in Bangkok, Thailand. Open to freelance projects."</p>
            </div>
        </div>
    }
}

/// Table of contents: click opens the glossary panel, double click jumps to the page.
fn contents(ctx: BookContext) -> impl IntoView {
    let glossary = TopicKey::glossary();
    let rows = PageMapping::portfolio()
        .rows()
        .iter()
        .filter(|row| row.array_index > 0)
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <ul class="glossary">
            {rows
                .into_iter()
                .map(|row| {
                    let glossary = glossary.clone();
                    let target = row.page_id.to_string();
                    view! {
                        <li
                            class="glossary-item"
                            data-target-page=target.clone()
                            on:click=move |_| ctx.open_topic(&glossary)
                            on:dblclick=move |_| ctx.navigate_to_page(&target)
                        >
                            <span class="glossary-text">{row.label}</span>
                            <span class="glossary-page">{row.display_number}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn flying_list(
    ctx: BookContext,
    class: &'static str,
    topics: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <ul class="flying-list">
            {topics
                .iter()
                .map(|(key, label)| {
                    view! {
                        <li
                            class=class
                            data-flying=*key
                            on:click=open_topic_on_click(ctx, "data-flying", key)
                        >
                            {*label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
