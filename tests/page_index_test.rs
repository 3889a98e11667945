//! Tests for the file backed page index

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use subpagelist::config::Settings;
use subpagelist::infrastructure::{
    InfraError, PageIndex, RealFileSystem, ServiceContainer, SubPageFinder,
};

#[test]
fn given_pages_file_when_loading_then_keeps_order_and_skips_comments() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pages.txt");
    fs::write(
        &path,
        "# all pages\nHelp\nHelp/Search\n\nHelp/Editing\nHelp/Editing/Tables\nHelp/Search\nMain\n",
    )
    .unwrap();

    // Act
    let index = PageIndex::load(&RealFileSystem, &path).unwrap();

    // Assert
    assert_eq!(index.len(), 5);
    assert_eq!(
        index.sub_pages_for("Help"),
        vec!["Help/Search", "Help/Editing", "Help/Editing/Tables"]
    );
    assert_eq!(index.sub_pages_for("Help/Editing"), vec!["Help/Editing/Tables"]);
    assert!(index.sub_pages_for("Main").is_empty());
}

#[test]
fn given_pages_file_with_underscored_titles_when_loading_through_container_then_normalized() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pages.txt");
    fs::write(&path, "Main_Page\nMain_Page/Sub\nMain  Page/Other\nBroken|Title\n").unwrap();
    let container = ServiceContainer::new(Settings::default());

    // Act
    let index = container.page_index(&path).unwrap();

    // Assert
    assert_eq!(index.len(), 3);
    assert_eq!(
        index.sub_pages_for("Main Page"),
        vec!["Main Page/Sub", "Main Page/Other"]
    );
    assert!(index.sub_pages_for("Main_Page").is_empty());
}

#[test]
fn given_missing_pages_file_when_loading_then_io_error() {
    // Act
    let result = PageIndex::load(&RealFileSystem, Path::new("/nonexistent/pages.txt"));

    // Assert
    match result {
        Err(InfraError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected I/O error, got {:?}", other),
    }
}
