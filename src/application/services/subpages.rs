//! Sub page list service
//!
//! Handles a list request end to end: title normalization, sub page lookup,
//! hierarchy construction and rendering.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::params::ListRequest;
use crate::application::renderer::{ListRenderer, RenderOptions};
use crate::application::ApplicationResult;
use crate::domain::{build_hierarchy, DomainError, Page, TitleNormalizer};
use crate::infrastructure::traits::SubPageFinder;

/// Service for listing the sub pages of a page.
pub struct SubPageListService {
    finder: Arc<dyn SubPageFinder>,
    normalizer: Arc<dyn TitleNormalizer>,
}

impl SubPageListService {
    pub fn new(finder: Arc<dyn SubPageFinder>, normalizer: Arc<dyn TitleNormalizer>) -> Self {
        Self { finder, normalizer }
    }

    /// Builds the hierarchy containing `raw_target` and all its sub pages.
    ///
    /// The target and its descendants always collapse into a single top
    /// level page. For a target like `A/B` that top level page is `A`.
    #[instrument(level = "debug", skip(self))]
    pub fn hierarchy_for(&self, raw_target: &str) -> ApplicationResult<Page> {
        let target = self.normalizer.normalize(raw_target)?;

        let mut paths = self
            .finder
            .sub_pages_for(&target)
            .iter()
            .map(|path| self.normalizer.normalize(path))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("hierarchy_for: {} has {} sub pages", target, paths.len());
        paths.push(target);

        let mut pages = build_hierarchy(&paths);
        if pages.len() != 1 {
            return Err(DomainError::StructuralInvariantViolation { found: pages.len() }.into());
        }
        Ok(pages.remove(0))
    }

    /// Renders the sub page list of `raw_target`.
    pub fn render(&self, raw_target: &str, options: &RenderOptions) -> ApplicationResult<String> {
        let root = self.hierarchy_for(raw_target)?;
        Ok(ListRenderer::new(options.clone()).render(&root))
    }

    /// Renders a parsed list request.
    pub fn handle(&self, request: &ListRequest) -> ApplicationResult<String> {
        self.render(&request.page, &request.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::WikiTitleNormalizer;
    use crate::infrastructure::traits::PageIndex;

    fn service(pages: &[&str]) -> SubPageListService {
        SubPageListService::new(
            Arc::new(PageIndex::from_paths(pages.iter().copied())),
            Arc::new(WikiTitleNormalizer::new()),
        )
    }

    #[test]
    fn test_hierarchy_for_sub_page_starts_at_top_level() {
        let service = service(&["CCC/Sub"]);
        let root = service.hierarchy_for("CCC/Sub").unwrap();
        assert_eq!(root.path, "CCC");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].path, "CCC/Sub");
    }

    #[test]
    fn test_invalid_target_is_invalid_input() {
        let err = service(&[]).hierarchy_for("Invalid|Title").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidInput { .. })
        ));
    }

    /// Finder that ignores the target and leaks unrelated pages.
    struct LeakyFinder;

    impl SubPageFinder for LeakyFinder {
        fn sub_pages_for(&self, _target: &str) -> Vec<String> {
            vec!["Elsewhere/Page".to_string()]
        }
    }

    #[test]
    fn test_more_than_one_top_level_page_is_structural_violation() {
        let service =
            SubPageListService::new(Arc::new(LeakyFinder), Arc::new(WikiTitleNormalizer::new()));
        let err = service.hierarchy_for("Home").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::StructuralInvariantViolation { found: 2 })
        ));
    }
}
