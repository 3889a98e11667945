//! Page title normalization and validation.

use regex::Regex;
use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::page::SEGMENT_SEPARATOR;

/// Turns raw user input into a page path, or rejects it.
///
/// The hierarchy code never validates characters itself; every path
/// that reaches it has been through an implementation of this trait.
pub trait TitleNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> DomainResult<String>;
}

/// Wiki style title rules.
///
/// - surrounding whitespace is trimmed
/// - `_` is shown as a space, runs of spaces collapse to one
/// - `# < > [ ] | { }` and control characters are illegal
/// - no segment may be empty (`/A`, `A/`, `A//B`)
#[derive(Debug)]
pub struct WikiTitleNormalizer {
    illegal: Regex,
    spaces: Regex,
}

impl Default for WikiTitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WikiTitleNormalizer {
    pub fn new() -> Self {
        Self {
            illegal: Regex::new(r"[#<>\[\]|{}\p{Cc}]").expect("valid illegal-char regex"),
            spaces: Regex::new(r" {2,}").expect("valid whitespace regex"),
        }
    }
}

impl TitleNormalizer for WikiTitleNormalizer {
    fn normalize(&self, raw: &str) -> DomainResult<String> {
        let underscored = raw.replace('_', " ");
        let title = self.spaces.replace_all(underscored.trim(), " ").into_owned();

        if title.is_empty() {
            return Err(DomainError::invalid_input(raw, "empty title"));
        }
        if let Some(m) = self.illegal.find(&title) {
            return Err(DomainError::invalid_input(
                raw,
                format!("illegal character {:?}", m.as_str()),
            ));
        }
        if title
            .split(SEGMENT_SEPARATOR)
            .any(|segment| segment.trim().is_empty())
        {
            return Err(DomainError::invalid_input(raw, "empty path segment"));
        }

        trace!("normalize: {:?} -> {:?}", raw, title);
        Ok(title)
    }
}
