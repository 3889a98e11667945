//! Turns a flat list of page paths into a sub page hierarchy.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::page::{Page, SEGMENT_SEPARATOR};

/// Arena slot holding a page while the hierarchy is under construction.
#[derive(Debug)]
struct Slot {
    path: String,
    children: Vec<Index>,
}

/// Constructs a forest of [`Page`]s from slash delimited paths.
///
/// Pages live in an arena while being built and are looked up by path
/// through an index, so a child never needs a reference to its parent.
/// Ancestors implied by a deeper path are synthesized on the fly.
/// The first occurrence of a path wins; later ones are ignored.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    arena: Arena<Slot>,
    /// All pages, indexed by path
    index: HashMap<String, Index>,
    /// Top level pages, in insertion order
    top_level: Vec<Index>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct pages added so far, synthesized ancestors included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Adds one path, creating any missing ancestors first.
    ///
    /// Walks the proper prefixes of `path` left to right, then the path
    /// itself, attaching each one to the page of the previous prefix.
    #[instrument(level = "trace", skip(self))]
    pub fn add_path(&mut self, path: &str) {
        let ends = path
            .match_indices(SEGMENT_SEPARATOR)
            .map(|(pos, _)| pos)
            .chain(std::iter::once(path.len()));

        let mut parent = None;
        for end in ends {
            parent = Some(self.ensure_page(parent, &path[..end]));
        }
    }

    /// Consumes the builder and returns the top level pages with their subtrees.
    pub fn finish(mut self) -> Vec<Page> {
        let top_level = std::mem::take(&mut self.top_level);
        top_level
            .into_iter()
            .filter_map(|idx| self.take_page(idx))
            .collect()
    }

    /// Index of the page at `path`, inserted under `parent` if not yet known.
    fn ensure_page(&mut self, parent: Option<Index>, path: &str) -> Index {
        if let Some(&idx) = self.index.get(path) {
            return idx;
        }
        let idx = self.arena.insert(Slot {
            path: path.to_string(),
            children: Vec::new(),
        });
        self.index.insert(path.to_string(), idx);
        match parent {
            Some(parent) => self.arena[parent].children.push(idx),
            None => self.top_level.push(idx),
        }
        trace!("ensure_page: added {}", path);
        idx
    }

    fn take_page(&mut self, idx: Index) -> Option<Page> {
        let slot = self.arena.remove(idx)?;
        let children = slot
            .children
            .into_iter()
            .filter_map(|child| self.take_page(child))
            .collect();
        Some(Page::with_children(slot.path, children))
    }
}

/// Builds the hierarchy for the given paths, in input order.
///
/// The returned pages are the top level pages: every path without a `/`,
/// plus the synthesized first segment of every deeper path.
pub fn build_hierarchy<I, S>(paths: I) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = HierarchyBuilder::new();
    for path in paths {
        builder.add_path(path.as_ref());
    }
    let page_count = builder.len();
    let pages = builder.finish();
    debug!(
        "build_hierarchy: {} pages, top level: [{}]",
        page_count,
        pages.iter().map(|p| p.path.as_str()).join(", ")
    );
    pages
}
