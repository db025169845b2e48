//! Pages of the book and the routing table that names them.

pub mod aggregate;
pub mod mapping;

pub use aggregate::{Page, PageId, PageRegistry};
pub use mapping::{PageMapping, PageMappingEntry};
