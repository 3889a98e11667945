//! Renders a page hierarchy as an indented wiki list.
//!
//! ```text
//! [[X|X]]                      <- only with include_root
//! * [[X/Sub0|X/Sub0]]
//! * [[X/Sub2|X/Sub2]]
//! ** [[X/Sub2/Sub|X/Sub2/Sub]]
//! ```

use tracing::debug;

use crate::domain::Page;

/// What to emit when a page has no sub pages to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fallback {
    /// `"<path>" has no sub pages.`
    #[default]
    Default,
    /// Custom text, emitted verbatim
    Text(String),
    /// Emit nothing at all, not even the intro
    Nothing,
}

impl Fallback {
    fn text_for(&self, page: &Page) -> Option<String> {
        match self {
            Fallback::Default => Some(format!("\"{}\" has no sub pages.", page.path)),
            Fallback::Text(text) => Some(text.clone()),
            Fallback::Nothing => None,
        }
    }
}

/// Options for a single rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the root page itself as the first, unindented line
    pub include_root: bool,
    /// Maximum number of sub page lines, `None` for no limit
    pub max_entries: Option<usize>,
    /// Text placed before the list
    pub intro: String,
    /// Enclose the output in a container element
    pub wrap: bool,
    pub fallback: Fallback,
    /// Indentation marker, repeated once per depth level
    pub marker: String,
    /// CSS class of the container element
    pub container_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_root: false,
            max_entries: None,
            intro: String::new(),
            wrap: false,
            fallback: Fallback::Default,
            marker: "*".to_string(),
            container_class: "subpagelist".to_string(),
        }
    }
}

/// Self referencing wiki link for a page path.
pub fn page_link(path: &str) -> String {
    format!("[[{}|{}]]", path, path)
}

/// Depth first, pre-order list renderer.
#[derive(Debug, Clone, Default)]
pub struct ListRenderer {
    options: RenderOptions,
}

impl ListRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, root: &Page) -> String {
        let mut writer = ListWriter::new(&self.options);

        if self.options.include_root {
            writer.write_root(root);
        }
        writer.write_sub_pages(root, 1);

        let emitted = writer.emitted;
        let mut body = writer.out;
        debug!(
            "render: root={} emitted={} limit={:?}",
            root.path, emitted, self.options.max_entries
        );

        if emitted == 0 && !self.options.include_root {
            match self.options.fallback.text_for(root) {
                Some(text) => body = text,
                None => return String::new(),
            }
        }

        if body.is_empty() {
            return body;
        }

        let text = format!("{}{}", self.options.intro, body);
        if self.options.wrap {
            format!(
                "<div class=\"{}\">{}</div>",
                self.options.container_class, text
            )
        } else {
            text
        }
    }
}

/// Accumulates list lines and counts emitted sub pages for the limit.
struct ListWriter<'a> {
    options: &'a RenderOptions,
    out: String,
    emitted: usize,
}

impl<'a> ListWriter<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
            emitted: 0,
        }
    }

    fn limit_reached(&self) -> bool {
        self.options
            .max_entries
            .is_some_and(|max| self.emitted >= max)
    }

    fn write_root(&mut self, root: &Page) {
        self.out.push_str(&page_link(&root.path));
        self.out.push('\n');
    }

    fn write_sub_pages(&mut self, page: &Page, depth: usize) {
        for child in &page.children {
            if self.limit_reached() {
                return;
            }
            self.out.push_str(&self.options.marker.repeat(depth));
            self.out.push(' ');
            self.out.push_str(&page_link(&child.path));
            self.out.push('\n');
            self.emitted += 1;

            self.write_sub_pages(child, depth + 1);
        }
    }
}
