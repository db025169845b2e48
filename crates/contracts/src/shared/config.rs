//! Tuning values of the book.
//!
//! The numbers are UX tuning matched to the animation durations, so they live in a TOML
//! document instead of being scattered through the code. The default document is embedded;
//! a page may override any subset of keys.

use crate::error::BookError;
use serde::Deserialize;

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[viewport]
mobile_breakpoint_px = 768
scroll_unit_fraction = 0.25

[book_opened]
open_fraction = 0.25
close_fraction = 0.15

[timing]
settle_delay_ms = 800
page_flip_ms = 1500
scroll_to_ms = 1500
overlay_enter_ms = 800
overlay_exit_ms = 500
glossary_navigate_delay_ms = 600
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BookConfig {
    pub viewport: ViewportConfig,
    pub book_opened: BookOpenedConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Widths at or below this value use tap navigation.
    pub mobile_breakpoint_px: f64,
    /// Share of the viewport height that one page flip occupies on the scroll track.
    pub scroll_unit_fraction: f64,
}

/// Hysteresis band of the "book opened" background treatment.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BookOpenedConfig {
    pub open_fraction: f64,
    pub close_fraction: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u32,
    pub page_flip_ms: u32,
    pub scroll_to_ms: u32,
    pub overlay_enter_ms: u32,
    pub overlay_exit_ms: u32,
    pub glossary_navigate_delay_ms: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
            scroll_unit_fraction: 0.25,
        }
    }
}

impl Default for BookOpenedConfig {
    fn default() -> Self {
        Self {
            open_fraction: 0.25,
            close_fraction: 0.15,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 800,
            page_flip_ms: 1500,
            scroll_to_ms: 1500,
            overlay_enter_ms: 800,
            overlay_exit_ms: 500,
            glossary_navigate_delay_ms: 600,
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            book_opened: BookOpenedConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl BookConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, BookError> {
        let config: BookConfig =
            toml::from_str(source).map_err(|e| BookError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded default document.
    pub fn embedded() -> Result<Self, BookError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<(), BookError> {
        if !(self.viewport.scroll_unit_fraction > 0.0) {
            return Err(BookError::ConfigValue {
                field: "viewport.scroll_unit_fraction",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.viewport.mobile_breakpoint_px >= 0.0) {
            return Err(BookError::ConfigValue {
                field: "viewport.mobile_breakpoint_px",
                reason: "must not be negative".to_string(),
            });
        }
        if !(self.book_opened.close_fraction < self.book_opened.open_fraction) {
            return Err(BookError::ConfigValue {
                field: "book_opened.close_fraction",
                reason: format!(
                    "must be below open_fraction ({})",
                    self.book_opened.open_fraction
                ),
            });
        }
        if self.timing.glossary_navigate_delay_ms < self.timing.overlay_exit_ms {
            return Err(BookError::ConfigValue {
                field: "timing.glossary_navigate_delay_ms",
                reason: format!(
                    "must not be shorter than overlay_exit_ms ({})",
                    self.timing.overlay_exit_ms
                ),
            });
        }
        Ok(())
    }

    /// Height in pixels of one page flip on the scroll track.
    pub fn scroll_unit(&self, viewport_height: f64) -> f64 {
        viewport_height * self.viewport.scroll_unit_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = BookConfig::embedded();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), BookConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = BookConfig::from_toml(
            r#"
            [timing]
            settle_delay_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.settle_delay_ms, 1000);
        assert_eq!(config.timing.overlay_exit_ms, 500);
        assert_eq!(config.viewport.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn test_inverted_hysteresis_rejected() {
        let err = BookConfig::from_toml(
            r#"
            [book_opened]
            open_fraction = 0.1
            close_fraction = 0.2
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BookError::ConfigValue {
                field: "book_opened.close_fraction",
                ..
            }
        ));
    }

    #[test]
    fn test_glossary_delay_must_cover_exit() {
        let err = BookConfig::from_toml(
            r#"
            [timing]
            overlay_exit_ms = 700
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, BookError::ConfigValue { .. }));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = BookConfig::from_toml("[timing\nsettle").unwrap_err();
        assert!(matches!(err, BookError::ConfigParse(_)));
    }

    #[test]
    fn test_scroll_unit() {
        let config = BookConfig::default();
        assert_eq!(config.scroll_unit(800.0), 200.0);
    }
}
