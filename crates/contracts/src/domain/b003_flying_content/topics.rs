//! Typed topic keys.
//!
//! Click targets in the markup carry flat string attributes. They are parsed into a
//! [`TopicKey`] once, at startup, and checked against the catalog there; a click handler
//! only ever sees the typed key.

use crate::error::BookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentTableId {
    Glossary,
    AboutMe,
    AboutFull,
    Journey,
    Skills,
    SkillDetail,
    Projects,
    ProjectDetail,
    WebDev,
    WebDevDetail,
    Design,
    DesignDetail,
}

impl ContentTableId {
    pub fn name(&self) -> &'static str {
        match self {
            ContentTableId::Glossary => "glossary",
            ContentTableId::AboutMe => "about-me",
            ContentTableId::AboutFull => "about-full",
            ContentTableId::Journey => "journey",
            ContentTableId::Skills => "skills",
            ContentTableId::SkillDetail => "skill-detail",
            ContentTableId::Projects => "projects",
            ContentTableId::ProjectDetail => "project-detail",
            ContentTableId::WebDev => "web-dev",
            ContentTableId::WebDevDetail => "web-dev-detail",
            ContentTableId::Design => "design",
            ContentTableId::DesignDetail => "design-detail",
        }
    }

    pub fn all() -> [ContentTableId; 12] {
        [
            ContentTableId::Glossary,
            ContentTableId::AboutMe,
            ContentTableId::AboutFull,
            ContentTableId::Journey,
            ContentTableId::Skills,
            ContentTableId::SkillDetail,
            ContentTableId::Projects,
            ContentTableId::ProjectDetail,
            ContentTableId::WebDev,
            ContentTableId::WebDevDetail,
            ContentTableId::Design,
            ContentTableId::DesignDetail,
        ]
    }
}

pub const GLOSSARY_KEY: &str = "contents";

const WEB_DEV_DETAIL_KEYS: [&str; 5] = ["frontend", "backend", "fullstack", "responsive", "performance"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicKey {
    pub table: ContentTableId,
    pub key: String,
}

impl TopicKey {
    pub fn new(table: ContentTableId, key: &str) -> Self {
        Self {
            table,
            key: key.to_string(),
        }
    }

    pub fn glossary() -> Self {
        Self::new(ContentTableId::Glossary, GLOSSARY_KEY)
    }

    /// Parse a markup attribute (`name="value"`) into a topic key.
    pub fn from_attribute(name: &str, value: &str) -> Result<Self, BookError> {
        let table = match name {
            "data-about-topic" => ContentTableId::AboutMe,
            "data-page-content" => ContentTableId::AboutFull,
            "data-journey-content" => ContentTableId::Journey,
            "data-skills-content" => ContentTableId::Skills,
            "data-skill-topic" => ContentTableId::SkillDetail,
            "data-design" => ContentTableId::DesignDetail,
            "data-target" if value == "design" => {
                return Ok(Self::new(ContentTableId::Design, "design-portfolio-full"))
            }
            "data-flying" => return Self::from_flying(value),
            _ => {
                return Err(BookError::UnknownTopicAttribute {
                    attribute: format!("{name}={value}"),
                })
            }
        };
        Ok(Self::new(table, value))
    }

    fn from_flying(value: &str) -> Result<Self, BookError> {
        match value {
            "projects" => Ok(Self::new(ContentTableId::Projects, "projects-full")),
            "web-development" => Ok(Self::new(ContentTableId::WebDev, "web-dev-full")),
            v if v.starts_with("project-") => Ok(Self::new(ContentTableId::ProjectDetail, v)),
            v if WEB_DEV_DETAIL_KEYS.contains(&v) => Ok(Self::new(ContentTableId::WebDevDetail, v)),
            v => Err(BookError::UnknownTopicAttribute {
                attribute: format!("data-flying={v}"),
            }),
        }
    }
}
