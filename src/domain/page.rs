//! Page node of a sub page hierarchy.

use std::fmt;

use termtree::Tree;

/// Separator between the segments of a page path.
pub const SEGMENT_SEPARATOR: char = '/';

/// A page in the hierarchy.
///
/// A page exclusively owns its children. Every child path is exactly one
/// segment longer than its parent's path, so no cycles can form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Full path of the page, e.g. `Help/Editing/Tables`
    pub path: String,
    /// Direct sub pages, in the order they were first encountered
    pub children: Vec<Page>,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(path: impl Into<String>, children: Vec<Page>) -> Self {
        Self {
            path: path.into(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of levels in the subtree rooted at this page (a lone page is 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Page::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of pages below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Converts the subtree into a `termtree` drawing for terminal display.
    pub fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(Page::to_tree_string).collect();
        Tree::new(self.path.clone()).with_leaves(leaves)
    }
}
