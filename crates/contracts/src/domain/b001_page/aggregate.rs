use std::fmt;

use super::mapping::PageMapping;

// ============================================================================
// ID Type
// ============================================================================

/// Stable routing key of a page, taken from its `data-page-id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One panel of the book. Its visual transform lives in the animation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub page_id: Option<PageId>,
    pub display_number: usize,
}

// ============================================================================
// Registry
// ============================================================================

/// Ordered, fixed-size list of pages, built once from the rendered document.
///
/// Order is document order and defines stacking and the scroll track. Pages are never
/// added or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    /// Build from the `data-page-id` attributes of the page elements, in document order.
    pub fn from_page_ids<I, S>(ids: I, mapping: &PageMapping) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let pages = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| Page {
                index,
                page_id: id.map(PageId::new),
                display_number: mapping.display_number(index),
            })
            .collect();
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Direct lookup by identifier, bypassing the mapping.
    pub fn index_of(&self, page_id: &str) -> Option<usize> {
        self.pages
            .iter()
            .find(|p| p.page_id.as_ref().map(|id| id.as_str()) == Some(page_id))
            .map(|p| p.index)
    }

    pub fn page_id(&self, index: usize) -> Option<&PageId> {
        self.get(index).and_then(|p| p.page_id.as_ref())
    }
}
