//! Sub page lists for wikis.
//!
//! Derives a hierarchy of pages from flat, slash delimited page paths and
//! renders it as an indented wiki list:
//!
//! ```
//! use subpagelist::application::{ListRenderer, RenderOptions};
//! use subpagelist::domain::build_hierarchy;
//!
//! let pages = build_hierarchy(["X/Sub0", "X/Sub1", "X/Sub1/Deep"]);
//! let text = ListRenderer::new(RenderOptions::default()).render(&pages[0]);
//! assert_eq!(text, "* [[X/Sub0|X/Sub0]]\n* [[X/Sub1|X/Sub1]]\n** [[X/Sub1/Deep|X/Sub1/Deep]]\n");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{Fallback, ListRenderer, RenderOptions, SubPageListService};
pub use domain::{build_hierarchy, DomainError, HierarchyBuilder, Page};
