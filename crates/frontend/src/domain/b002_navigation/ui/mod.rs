use leptos::prelude::*;

use crate::layout::global_context::use_book;

/// Discrete navigation controls, shown in mobile mode only.
#[component]
#[allow(non_snake_case)]
pub fn MobileNav() -> impl IntoView {
    let ctx = use_book();
    let view_state = ctx.view;

    view! {
        <div
            class="mobile-nav-container"
            style:display=move || if view_state.get().controls_visible { "flex" } else { "none" }
        >
            <button
                id="prevBtn"
                class="nav-btn nav-btn--prev"
                aria-label="Previous page"
                disabled=move || view_state.get().prev_disabled
                on:click=move |_| ctx.previous()
            >
                "‹"
            </button>
            <div class="page-indicator">
                <span class="current-page">{move || view_state.get().current_display}</span>
                " / "
                <span class="total-pages">{move || view_state.get().total}</span>
            </div>
            <button
                id="nextBtn"
                class="nav-btn nav-btn--next"
                aria-label="Next page"
                disabled=move || view_state.get().next_disabled
                on:click=move |_| ctx.next()
            >
                "›"
            </button>
        </div>
    }
}
