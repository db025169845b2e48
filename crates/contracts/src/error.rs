use thiserror::Error;

/// Startup-time problems. Runtime operations never fail; they silently do nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookError {
    #[error("invalid book config: {0}")]
    ConfigParse(String),

    #[error("invalid book config value `{field}`: {reason}")]
    ConfigValue { field: &'static str, reason: String },

    #[error("page mapping row `{page_id}` points at index {array_index}, but the book has {total} pages")]
    MappingOutOfRange {
        page_id: String,
        array_index: usize,
        total: usize,
    },

    #[error("page mapping index {array_index} is used by more than one row")]
    MappingDuplicateIndex { array_index: usize },

    #[error("page mapping row `{page_id}` does not match page `{found}` at index {array_index}")]
    MappingMismatch {
        page_id: String,
        array_index: usize,
        found: String,
    },

    #[error("unknown topic attribute `{attribute}`")]
    UnknownTopicAttribute { attribute: String },

    #[error("topic `{key}` is missing from content table `{table}`")]
    UnknownTopic { table: &'static str, key: String },
}
