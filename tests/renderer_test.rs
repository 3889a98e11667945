//! Tests for ListRenderer

use rstest::rstest;

use subpagelist::application::{Fallback, ListRenderer, RenderOptions};
use subpagelist::domain::{build_hierarchy, Page};

fn single_root(paths: &[&str]) -> Page {
    let mut pages = build_hierarchy(paths.iter().copied());
    assert_eq!(pages.len(), 1, "expected exactly one top level page");
    pages.remove(0)
}

fn x_tree() -> Page {
    single_root(&["X/Sub0", "X/Sub1", "X/Sub2", "X/Sub2/Sub", "X"])
}

fn render(root: &Page, options: RenderOptions) -> String {
    ListRenderer::new(options).render(root)
}

#[test]
fn given_default_options_when_rendering_then_depth_prefixed_links() {
    let out = render(&x_tree(), RenderOptions::default());

    assert_eq!(
        out,
        "* [[X/Sub0|X/Sub0]]\n* [[X/Sub1|X/Sub1]]\n* [[X/Sub2|X/Sub2]]\n** [[X/Sub2/Sub|X/Sub2/Sub]]\n"
    );
}

#[rstest]
#[case(Some(0), "")]
#[case(Some(1), "* [[X/Sub0|X/Sub0]]\n")]
#[case(Some(2), "* [[X/Sub0|X/Sub0]]\n* [[X/Sub1|X/Sub1]]\n")]
#[case(Some(4), "* [[X/Sub0|X/Sub0]]\n* [[X/Sub1|X/Sub1]]\n* [[X/Sub2|X/Sub2]]\n** [[X/Sub2/Sub|X/Sub2/Sub]]\n")]
fn given_max_entries_when_rendering_then_truncates(
    #[case] max_entries: Option<usize>,
    #[case] expected: &str,
) {
    let out = render(
        &x_tree(),
        RenderOptions {
            max_entries,
            fallback: Fallback::Nothing,
            ..Default::default()
        },
    );

    assert_eq!(out, expected);
}

#[test]
fn given_root_without_children_when_rendering_defaults_then_no_sub_pages_message() {
    let out = render(&Page::new("Lonely/Page"), RenderOptions::default());

    assert_eq!(out, "\"Lonely/Page\" has no sub pages.");
}

#[test]
fn given_nothing_fallback_when_rendering_childless_root_then_empty() {
    let out = render(
        &Page::new("Lonely"),
        RenderOptions {
            intro: "Intro".to_string(),
            fallback: Fallback::Nothing,
            ..Default::default()
        },
    );

    assert_eq!(out, "");
}

#[test]
fn given_custom_fallback_when_rendering_childless_root_then_custom_text() {
    let out = render(
        &Page::new("Lonely"),
        RenderOptions {
            fallback: Fallback::Text("Nothing below.".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(out, "Nothing below.");
}

#[test]
fn given_include_root_and_wrap_when_rendering_childless_root_then_root_line_in_container() {
    let out = render(
        &Page::new("AAA"),
        RenderOptions {
            include_root: true,
            wrap: true,
            ..Default::default()
        },
    );

    assert_eq!(out, "<div class=\"subpagelist\">[[AAA|AAA]]\n</div>");
}

#[test]
fn given_include_root_when_rendering_then_root_first_and_unindented() {
    let out = render(
        &x_tree(),
        RenderOptions {
            include_root: true,
            max_entries: Some(1),
            ..Default::default()
        },
    );

    assert_eq!(out, "[[X|X]]\n* [[X/Sub0|X/Sub0]]\n");
}

#[test]
fn given_include_root_and_zero_limit_when_rendering_then_root_only() {
    let out = render(
        &x_tree(),
        RenderOptions {
            include_root: true,
            max_entries: Some(0),
            ..Default::default()
        },
    );

    assert_eq!(out, "[[X|X]]\n");
}

#[test]
fn given_intro_when_rendering_then_prefixed_once() {
    let out = render(
        &x_tree(),
        RenderOptions {
            intro: "Sub pages:\n".to_string(),
            max_entries: Some(1),
            ..Default::default()
        },
    );

    assert_eq!(out, "Sub pages:\n* [[X/Sub0|X/Sub0]]\n");
}

#[test]
fn given_custom_container_class_when_wrapping_then_used() {
    let out = render(
        &x_tree(),
        RenderOptions {
            wrap: true,
            container_class: "toc".to_string(),
            max_entries: Some(1),
            ..Default::default()
        },
    );

    assert_eq!(out, "<div class=\"toc\">* [[X/Sub0|X/Sub0]]\n</div>");
}
