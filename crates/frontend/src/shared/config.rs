use contracts::shared::config::BookConfig;
use web_sys::Document;

/// Id of the optional inline override: `<script type="application/toml" id="book-config">`.
pub const CONFIG_ELEMENT_ID: &str = "book-config";

/// Load the book configuration.
///
/// Search order:
/// 1. Inline TOML block in the page (keys it leaves out keep their defaults)
/// 2. Falls back to the embedded default config
pub fn load_config(document: &Document) -> anyhow::Result<BookConfig> {
    if let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) {
        let source = element.text_content().unwrap_or_default();
        log::info!("Loading book config from #{CONFIG_ELEMENT_ID}");
        let config = BookConfig::from_toml(&source)?;
        return Ok(config);
    }

    log::info!("Using default embedded book configuration");
    let config = BookConfig::embedded()?;
    Ok(config)
}
