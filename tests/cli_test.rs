//! Tests for command dispatch

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use subpagelist::cli::{execute_command, Cli};
use subpagelist::exitcode;
use subpagelist::util::testing;

fn pages_file(dir: &TempDir) -> String {
    let path = dir.path().join("pages.txt");
    fs::write(&path, "DDD\nDDD/Sub0\nDDD/Sub1\nDDD/Sub1/Deep\n").unwrap();
    path.display().to_string()
}

fn run(args: &[&str]) -> Result<(), i32> {
    testing::init_test_setup();
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    execute_command(&cli).map_err(|e| e.exit_code())
}

#[test]
fn given_pages_file_when_rendering_then_succeeds() {
    let temp = TempDir::new().unwrap();
    let pages = pages_file(&temp);
    let dir = temp.path().display().to_string();

    let result = run(&[
        "subpagelist", "-C", &dir, "render", "--pages", &pages, "page=DDD", "limit=2",
    ]);

    assert_eq!(result, Ok(()));
}

#[test]
fn given_pages_file_when_showing_tree_then_succeeds() {
    let temp = TempDir::new().unwrap();
    let pages = pages_file(&temp);
    let dir = temp.path().display().to_string();

    let result = run(&["subpagelist", "-C", &dir, "tree", "--pages", &pages, "DDD/Sub1"]);

    assert_eq!(result, Ok(()));
}

#[test]
fn given_invalid_title_when_rendering_then_data_error_exit_code() {
    let temp = TempDir::new().unwrap();
    let pages = pages_file(&temp);
    let dir = temp.path().display().to_string();

    let result = run(&[
        "subpagelist", "-C", &dir, "render", "--pages", &pages, "page=Bad|Title",
    ]);

    assert_eq!(result, Err(exitcode::DATAERR));
}

#[test]
fn given_negative_limit_when_rendering_then_usage_exit_code() {
    let temp = TempDir::new().unwrap();
    let pages = pages_file(&temp);
    let dir = temp.path().display().to_string();

    let result = run(&[
        "subpagelist", "-C", &dir, "render", "--pages", &pages, "page=DDD", "limit=-3",
    ]);

    assert_eq!(result, Err(exitcode::USAGE));
}

#[test]
fn given_missing_pages_file_when_listing_then_no_input_exit_code() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().display().to_string();
    let missing = temp.path().join("missing.txt").display().to_string();

    let result = run(&["subpagelist", "-C", &dir, "pages", "--pages", &missing, "DDD"]);

    assert_eq!(result, Err(exitcode::NOINPUT));
}
