use crate::domain::b001_page::PageId;

/// Visual family of a panel; the frontend maps it to CSS class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayStyle {
    Glossary,
    About,
    Full,
    Journey,
    Skills,
    Projects,
    WebDev,
    Design,
}

impl OverlayStyle {
    /// Class prefix used by the stylesheet, e.g. `flying-web-dev`.
    pub fn class_prefix(&self) -> &'static str {
        match self {
            OverlayStyle::Glossary => "flying-glossary",
            OverlayStyle::About => "flying-about",
            OverlayStyle::Full => "flying-full",
            OverlayStyle::Journey => "flying-journey",
            OverlayStyle::Skills => "flying-skills",
            OverlayStyle::Projects => "flying-projects",
            OverlayStyle::WebDev => "flying-web-dev",
            OverlayStyle::Design => "flying-design",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLink {
    pub label: String,
    pub url: String,
}

/// A labelled one-line detail such as "Tools I use: Git, GitHub".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub heading: Option<String>,
    pub text: Option<String>,
    pub detail: Option<Detail>,
    pub links: Vec<OverlayLink>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: &str) -> Self {
        self.heading = Some(heading.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn detail(mut self, label: &str, text: &str) -> Self {
        self.detail = Some(Detail {
            label: label.to_string(),
            text: text.to_string(),
        });
        self
    }

    pub fn link(mut self, label: &str, url: &str) -> Self {
        self.links.push(OverlayLink {
            label: label.to_string(),
            url: url.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub text: String,
    pub page_label: String,
    pub page_id: PageId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayBody {
    Bullets(Vec<String>),
    Sections(Vec<Section>),
    Glossary(Vec<GlossaryEntry>),
}

/// Render-only panel content. Built fresh on every open and thrown away on the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: String,
    pub style: OverlayStyle,
    pub body: OverlayBody,
    pub footer: Option<String>,
}

impl OverlayContent {
    pub fn bullets(style: OverlayStyle, title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            style,
            body: OverlayBody::Bullets(items.iter().map(|s| s.to_string()).collect()),
            footer: None,
        }
    }

    pub fn sections(style: OverlayStyle, title: &str, sections: Vec<Section>) -> Self {
        Self {
            title: title.to_string(),
            style,
            body: OverlayBody::Sections(sections),
            footer: None,
        }
    }

    pub fn glossary(title: &str, entries: Vec<GlossaryEntry>) -> Self {
        Self {
            title: title.to_string(),
            style: OverlayStyle::Glossary,
            body: OverlayBody::Glossary(entries),
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: &str) -> Self {
        self.footer = Some(footer.to_string());
        self
    }

    /// Glossary target at `index`, if this is a glossary panel.
    pub fn glossary_target(&self, index: usize) -> Option<&PageId> {
        match &self.body {
            OverlayBody::Glossary(entries) => entries.get(index).map(|e| &e.page_id),
            _ => None,
        }
    }
}
