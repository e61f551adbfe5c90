// Markdown-rendered input.
//
// Content often reaches the converter as markdown that an upstream tool has
// already rendered to HTML. These tests render markdown with pulldown-cmark
// and check what survives conversion.

use html2keep::{convert, Diagnostic};
use pretty_assertions::assert_eq;
use pulldown_cmark::{html, Parser};

fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

fn unsupported_tags(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .filter_map(|d| match d {
            Diagnostic::UnsupportedTag { tag, .. } => Some(tag.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn heading_and_strong() {
    let out = convert(&render_markdown("# Title\n\nBody **text**\n"));
    assert_eq!(out.html, "<h1>Title</h1><p>Body <b>text</b></p>");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn deep_heading_and_emphasis() {
    let out = convert(&render_markdown("### Sub\n\n*it* and _em_\n"));
    assert_eq!(out.html, "<h2>Sub</h2><p><i>it</i> and <i>em</i></p>");
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::DowngradedHeading { from: 3, to: 2 }]
    );
}

#[test]
fn tight_nested_list() {
    let out = convert(&render_markdown("1. one\n2. two\n   - nested\n"));
    assert_eq!(out.plain_text, "1. one\n2. two\n    - nested");
    assert_eq!(out.diagnostics, vec![Diagnostic::ListFlattened { depth: 1 }]);
}

#[test]
fn loose_list_items_stay_on_their_marker_line() {
    let out = convert(&render_markdown("- a\n\n- b\n"));
    assert_eq!(out.html, "<p>- a</p><p>- b</p>");
}

#[test]
fn ordered_list_start_carries_over() {
    let out = convert(&render_markdown("7. seven\n8. eight\n"));
    assert_eq!(out.plain_text, "7. seven\n8. eight");
}

#[test]
fn links_and_code_spans_keep_their_text() {
    let out = convert(&render_markdown("See [docs](https://example.com) and `code`\n"));
    assert_eq!(out.html, "<p>See docs and code</p>");
    assert_eq!(unsupported_tags(&out.diagnostics), vec!["a", "code"]);
}

#[test]
fn fenced_code_becomes_paragraph() {
    let out = convert(&render_markdown("```\nfn main() {}\n```\n"));
    assert_eq!(out.html, "<p>fn main() {}</p>");
    assert_eq!(unsupported_tags(&out.diagnostics), vec!["pre", "code"]);
}

#[test]
fn blockquote_unwrapped() {
    let out = convert(&render_markdown("> quoted\n"));
    assert_eq!(out.html, "<p>quoted</p>");
    assert_eq!(unsupported_tags(&out.diagnostics), vec!["blockquote"]);
}

#[test]
fn hard_break() {
    let out = convert(&render_markdown("a  \nb\n"));
    assert_eq!(out.html, "<p>a<br />b</p>");
    assert_eq!(out.plain_text, "a\nb");
}
