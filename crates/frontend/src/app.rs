use crate::domain::b005_book::ui::Book;
use crate::layout::global_context::BookContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One book per page; every component reaches it through the context.
    provide_context(BookContext::new());

    view! {
        <Book />
    }
}
