//! Domain layer: pages and the hierarchy rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod hierarchy;
pub mod page;
pub mod title;

pub use error::{DomainError, DomainResult};
pub use hierarchy::{build_hierarchy, HierarchyBuilder};
pub use page::{Page, SEGMENT_SEPARATOR};
pub use title::{TitleNormalizer, WikiTitleNormalizer};
