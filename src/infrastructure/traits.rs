//! I/O boundary traits for testability
//!
//! These traits abstract page storage and file access, allowing services
//! to be tested with in-memory implementations.

use std::io;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::domain::{TitleNormalizer, SEGMENT_SEPARATOR};
use crate::infrastructure::{InfraError, InfraResult};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Source of sub page paths.
pub trait SubPageFinder: Send + Sync {
    /// All page paths below `target`, at any depth, in storage order.
    ///
    /// Every returned path starts with `target` followed by `/`.
    fn sub_pages_for(&self, target: &str) -> Vec<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Ordered, duplicate free list of known page paths.
///
/// The pages file format is one path per line; blank lines and lines
/// starting with `#` are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    paths: Vec<String>,
}

impl PageIndex {
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::<String>::into).unique().collect(),
        }
    }

    pub fn parse(content: &str) -> Self {
        Self::from_paths(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a pages file.
    #[instrument(level = "debug", skip(fs))]
    pub fn load(fs: &dyn FileSystem, path: &Path) -> InfraResult<Self> {
        let content = fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read pages file {}", path.display()), e))?;
        let index = Self::parse(&content);
        debug!("load: {} pages from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Rewrites every stored path into its normalized title form.
    ///
    /// Sub page lookups take normalized targets and match them against
    /// the stored paths verbatim. Invalid titles are dropped; titles that
    /// collapse onto the same form keep the first.
    pub fn normalized(self, normalizer: &dyn TitleNormalizer) -> Self {
        let paths = self
            .paths
            .into_iter()
            .filter_map(|path| match normalizer.normalize(&path) {
                Ok(title) => Some(title),
                Err(e) => {
                    warn!("skipping page {:?}: {}", path, e);
                    None
                }
            })
            .unique()
            .collect();
        Self { paths }
    }
}

impl SubPageFinder for PageIndex {
    fn sub_pages_for(&self, target: &str) -> Vec<String> {
        let prefix = format!("{}{}", target, SEGMENT_SEPARATOR);
        self.paths
            .iter()
            .filter(|path| path.starts_with(&prefix))
            .cloned()
            .collect()
    }
}
