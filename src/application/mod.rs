//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod params;
pub mod renderer;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use params::{parse_params, ListRequest, NO_OUTPUT_SENTINEL};
pub use renderer::{page_link, Fallback, ListRenderer, RenderOptions};
pub use services::SubPageListService;
