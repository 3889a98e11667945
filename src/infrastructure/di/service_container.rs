//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::Path;
use std::sync::Arc;

use crate::application::SubPageListService;
use crate::config::Settings;
use crate::domain::{TitleNormalizer, WikiTitleNormalizer};
use crate::infrastructure::traits::{FileSystem, PageIndex, RealFileSystem, SubPageFinder};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Title rules
    pub normalizer: Arc<dyn TitleNormalizer>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(WikiTitleNormalizer::new()),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        normalizer: Arc<dyn TitleNormalizer>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            normalizer,
        }
    }

    /// Load the page index from a pages file, with titles normalized.
    pub fn page_index(&self, pages_file: &Path) -> InfraResult<PageIndex> {
        let index = PageIndex::load(self.fs.as_ref(), pages_file)?;
        Ok(index.normalized(self.normalizer.as_ref()))
    }

    /// Sub page list service backed by the given finder.
    pub fn subpage_service(&self, finder: Arc<dyn SubPageFinder>) -> SubPageListService {
        SubPageListService::new(finder, Arc::clone(&self.normalizer))
    }
}
