use std::collections::HashSet;

use super::aggregate::{PageId, PageRegistry};
use crate::error::BookError;

/// One row of the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMappingEntry {
    pub array_index: usize,
    pub display_number: usize,
    pub page_id: PageId,
    pub label: String,
}

impl PageMappingEntry {
    pub fn new(array_index: usize, display_number: usize, page_id: &str, label: &str) -> Self {
        Self {
            array_index,
            display_number,
            page_id: PageId::new(page_id),
            label: label.to_string(),
        }
    }
}

/// Correlates registry positions, human-facing page numbers and page ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMapping {
    rows: Vec<PageMappingEntry>,
}

impl PageMapping {
    pub fn new(rows: Vec<PageMappingEntry>) -> Self {
        Self { rows }
    }

    /// Routing table of the portfolio book.
    pub fn portfolio() -> Self {
        Self::new(vec![
            PageMappingEntry::new(0, 0, "cover", "Cover"),
            PageMappingEntry::new(1, 1, "contents", "Contents"),
            PageMappingEntry::new(2, 2, "about-me", "About Me"),
            PageMappingEntry::new(3, 3, "my-journey", "My Journey"),
            PageMappingEntry::new(4, 4, "skills", "Skills"),
            PageMappingEntry::new(5, 5, "projects", "Projects"),
            PageMappingEntry::new(6, 6, "web-development", "Web Development"),
            PageMappingEntry::new(7, 7, "design-portfolio", "Design Portfolio"),
            PageMappingEntry::new(8, 8, "achievements", "Achievements"),
            PageMappingEntry::new(9, 9, "testimonials", "Testimonials"),
            PageMappingEntry::new(10, 10, "contact-links", "Contact & Links"),
        ])
    }

    pub fn rows(&self) -> &[PageMappingEntry] {
        &self.rows
    }

    pub fn by_page_id(&self, page_id: &str) -> Option<&PageMappingEntry> {
        self.rows.iter().find(|r| r.page_id.as_str() == page_id)
    }

    pub fn by_index(&self, array_index: usize) -> Option<&PageMappingEntry> {
        self.rows.iter().find(|r| r.array_index == array_index)
    }

    /// Human-facing number of a registry position; unmapped positions show their index.
    pub fn display_number(&self, array_index: usize) -> usize {
        self.by_index(array_index)
            .map(|r| r.display_number)
            .unwrap_or(array_index)
    }

    /// Check every row against the registry that was actually rendered.
    ///
    /// Returns all problems rather than the first one so startup can log them together.
    pub fn validate(&self, registry: &PageRegistry) -> Vec<BookError> {
        let total = registry.len();
        let mut seen = HashSet::new();
        let mut problems = Vec::new();

        for row in &self.rows {
            if row.array_index >= total {
                problems.push(BookError::MappingOutOfRange {
                    page_id: row.page_id.to_string(),
                    array_index: row.array_index,
                    total,
                });
                continue;
            }
            if !seen.insert(row.array_index) {
                problems.push(BookError::MappingDuplicateIndex {
                    array_index: row.array_index,
                });
                continue;
            }
            if let Some(found) = registry.page_id(row.array_index) {
                if found != &row.page_id {
                    problems.push(BookError::MappingMismatch {
                        page_id: row.page_id.to_string(),
                        array_index: row.array_index,
                        found: found.to_string(),
                    });
                }
            }
        }
        problems
    }
}
