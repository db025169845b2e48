//! The flying content overlay: expanded topic panels rendered from fixed tables.

pub mod catalog;
pub mod content;
mod portfolio;
pub mod presenter;
pub mod topics;

pub use catalog::{ContentCatalog, ContentTable};
pub use content::{Detail, GlossaryEntry, OverlayBody, OverlayContent, OverlayLink, OverlayStyle, Section};
pub use presenter::{OverlayPhase, OverlayPresenter};
pub use topics::{ContentTableId, TopicKey};
