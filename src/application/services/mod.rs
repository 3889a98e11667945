//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (SubPageFinder, TitleNormalizer)
//! but are themselves concrete structs, not traits.

mod subpages;

pub use subpages::SubPageListService;
