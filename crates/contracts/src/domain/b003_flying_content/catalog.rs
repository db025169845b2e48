use super::content::OverlayContent;
use super::portfolio;
use super::topics::{ContentTableId, TopicKey};
use crate::error::BookError;

/// Fixed `key → content` table for one topic category.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTable {
    id: ContentTableId,
    rows: Vec<(String, OverlayContent)>,
}

impl ContentTable {
    pub fn new(id: ContentTableId, rows: Vec<(&str, OverlayContent)>) -> Self {
        Self {
            id,
            rows: rows
                .into_iter()
                .map(|(key, content)| (key.to_string(), content))
                .collect(),
        }
    }

    pub fn id(&self) -> ContentTableId {
        self.id
    }

    pub fn get(&self, key: &str) -> Option<&OverlayContent> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every content table of the site.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    tables: Vec<ContentTable>,
}

impl ContentCatalog {
    pub fn new(tables: Vec<ContentTable>) -> Self {
        Self { tables }
    }

    pub fn portfolio() -> Self {
        Self::new(portfolio::tables())
    }

    pub fn table(&self, id: ContentTableId) -> Option<&ContentTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn lookup(&self, topic: &TopicKey) -> Option<&OverlayContent> {
        self.table(topic.table).and_then(|t| t.get(&topic.key))
    }

    /// Startup check of the keys found in the markup.
    pub fn validate<'a>(&self, topics: impl IntoIterator<Item = &'a TopicKey>) -> Vec<BookError> {
        topics
            .into_iter()
            .filter(|topic| self.lookup(topic).is_none())
            .map(|topic| BookError::UnknownTopic {
                table: topic.table.name(),
                key: topic.key.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b001_page::PageMapping;
    use crate::domain::b003_flying_content::content::{OverlayBody, OverlayStyle};

    #[test]
    fn test_every_table_is_present_and_non_empty() {
        let catalog = ContentCatalog::portfolio();
        for id in ContentTableId::all() {
            let table = catalog.table(id);
            assert!(table.is_some(), "missing table {}", id.name());
            assert!(!table.unwrap().is_empty(), "empty table {}", id.name());
        }
    }

    #[test]
    fn test_table_sizes() {
        let catalog = ContentCatalog::portfolio();
        let size = |id| catalog.table(id).map(ContentTable::len).unwrap_or(0);
        assert_eq!(size(ContentTableId::AboutMe), 8);
        assert_eq!(size(ContentTableId::SkillDetail), 6);
        assert_eq!(size(ContentTableId::ProjectDetail), 2);
        assert_eq!(size(ContentTableId::WebDevDetail), 5);
        assert_eq!(size(ContentTableId::DesignDetail), 7);
    }

    #[test]
    fn test_glossary_targets_are_mapped_pages() {
        let catalog = ContentCatalog::portfolio();
        let mapping = PageMapping::portfolio();
        let glossary = catalog.lookup(&TopicKey::glossary()).unwrap();
        assert_eq!(glossary.style, OverlayStyle::Glossary);

        let OverlayBody::Glossary(entries) = &glossary.body else {
            panic!("glossary body expected");
        };
        assert_eq!(entries.len(), 10);
        for entry in entries {
            let row = mapping.by_page_id(entry.page_id.as_str()).unwrap();
            assert_eq!(row.display_number.to_string(), entry.page_label);
        }
    }

    #[test]
    fn test_project_details_carry_links() {
        let catalog = ContentCatalog::portfolio();
        let project = catalog
            .lookup(&TopicKey::new(ContentTableId::ProjectDetail, "project-1"))
            .unwrap();
        let OverlayBody::Sections(sections) = &project.body else {
            panic!("sections expected");
        };
        assert_eq!(sections[0].links.len(), 2);
        assert!(sections[0].links[0].url.starts_with("https://"));
    }

    #[test]
    fn test_validate_reports_unknown_keys() {
        let catalog = ContentCatalog::portfolio();
        let keys = vec![
            TopicKey::new(ContentTableId::AboutMe, "seo"),
            TopicKey::new(ContentTableId::AboutMe, "cooking"),
            TopicKey::new(ContentTableId::ProjectDetail, "project-9"),
        ];
        assert_eq!(
            catalog.validate(&keys),
            vec![
                BookError::UnknownTopic { table: "about-me", key: "cooking".to_string() },
                BookError::UnknownTopic { table: "project-detail", key: "project-9".to_string() },
            ]
        );
    }
}
