//! The book as a whole: one controller object owning every piece of UI state.

pub mod controller;
pub mod opened;

pub use controller::{BookController, Viewport};
pub use opened::BookOpenedTracker;

use crate::domain::b001_page::PageId;

/// Page id of the table of contents, where the glossary hint is shown.
pub const CONTENTS_PAGE_ID: &str = "contents";

/// Whether the "click the contents for a glossary" hint belongs on this page.
pub fn shows_glossary_hint(page_id: Option<&PageId>) -> bool {
    page_id.map(PageId::as_str) == Some(CONTENTS_PAGE_ID)
}
