// Whitespace normalization for text nodes and restricted markup trees.
//
// Text from the source tree is collapsed one node at a time; the tree pass
// afterwards merges adjacent text runs and collapses whitespace across the
// seams that merging creates.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{Inline, Node};

pub(crate) const NBSP: char = '\u{a0}';

/// Non-breaking indentation directly in front of a list marker.
static INDENTED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x{a0}+(?:-?[0-9]+\.|-) ").expect("static regex"));

/// A marker line holding only the empty-item placeholder.
static PLACEHOLDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x{a0}*(?:-?[0-9]+\.|-) \x{a0}$").expect("static regex"));

/// Normalize one source text node.
///
/// Whitespace runs, non-breaking spaces included, collapse to a single space,
/// or to a single `\n` when `newlines` is set and the run contains a line
/// feed. Two shapes written by the list flattener are kept as they are: the
/// non-breaking indentation in front of a `n. ` or `- ` marker, and a marker
/// line holding only the placeholder.
pub(crate) fn normalize_text(raw: &str, newlines: bool) -> String {
    if PLACEHOLDER_LINE.is_match(raw) {
        return raw.to_string();
    }
    let lead = if INDENTED_MARKER.is_match(raw) {
        raw.len() - raw.trim_start_matches(NBSP).len()
    } else {
        0
    };
    let (indent, rest) = raw.split_at(lead);

    let mut out = String::with_capacity(raw.len());
    out.push_str(indent);
    collapse_into(&mut out, rest, newlines);
    out
}

fn collapse_into(out: &mut String, text: &str, newlines: bool) {
    let mut run: Option<bool> = None; // Some(saw_newline) while inside a whitespace run
    for c in text.chars() {
        if c.is_whitespace() {
            let saw_newline = run.unwrap_or(false) || c == '\n';
            run = Some(saw_newline);
            continue;
        }
        if let Some(saw_newline) = run.take() {
            out.push(if newlines && saw_newline { '\n' } else { ' ' });
        }
        out.push(c);
    }
    if let Some(saw_newline) = run {
        out.push(if newlines && saw_newline { '\n' } else { ' ' });
    }
}

/// Merge adjacent text nodes and drop empty ones, recursively.
pub(crate) fn post_process(nodes: &mut Vec<Node>) {
    for node in nodes.iter_mut() {
        if let Some(children) = node.children_mut() {
            post_process(children);
        }
    }
    merge_adjacent_text(nodes);
    nodes.retain(|node| !matches!(node, Node::Text(t) if t.value.is_empty()));
}

/// Merge adjacent Text nodes into a single node and renormalize it, so the
/// merged value reads the same as one source text node would.
///
/// Values are already normalized, so the only line feeds left are ones the
/// `newlines` mode kept; renormalizing with line feeds enabled preserves them.
fn merge_adjacent_text(children: &mut Vec<Node>) {
    let mut i = 0;
    while i + 1 < children.len() {
        if is_text(&children[i]) && is_text(&children[i + 1]) {
            if let Node::Text(next) = children.remove(i + 1) {
                if let Node::Text(ref mut current) = children[i] {
                    current.value.push_str(&next.value);
                    current.value = normalize_text(&current.value, true);
                }
            }
        } else {
            i += 1;
        }
    }
}

/// Move whitespace at the edges of an inline wrapper's content outside the
/// wrapper, so `<b>bold </b>text` keeps its space once tags are trimmed.
pub(crate) fn hoist_edge_whitespace(mut inline: Inline) -> Vec<Node> {
    let mut before = String::new();
    let mut after = String::new();

    if let Some(Node::Text(first)) = inline.children.first_mut() {
        let trimmed = first.value.trim_start_matches(is_collapsible);
        before = first.value[..first.value.len() - trimmed.len()].to_string();
        first.value = trimmed.to_string();
    }
    if let Some(Node::Text(last)) = inline.children.last_mut() {
        let trimmed_len = last.value.trim_end_matches(is_collapsible).len();
        after = last.value[trimmed_len..].to_string();
        last.value.truncate(trimmed_len);
    }
    inline
        .children
        .retain(|node| !matches!(node, Node::Text(t) if t.value.is_empty()));

    let mut out = Vec::with_capacity(3);
    if !before.is_empty() {
        out.push(Node::text(before));
    }
    if !inline.children.is_empty() {
        out.push(Node::Inline(inline));
    }
    if !after.is_empty() {
        out.push(Node::text(after));
    }
    out
}

/// Trim collapsible whitespace at the edges of a run of phrasing nodes.
pub(crate) fn trim_run(children: &mut Vec<Node>) {
    if let Some(Node::Text(first)) = children.first_mut() {
        first.value = first.value.trim_start_matches(is_collapsible).to_string();
    }
    if let Some(Node::Text(last)) = children.last_mut() {
        let len = last.value.trim_end_matches(is_collapsible).len();
        last.value.truncate(len);
    }
    children.retain(|node| !matches!(node, Node::Text(t) if t.value.is_empty()));
}

/// Whitespace the normalizer may emit; non-breaking spaces are content.
fn is_collapsible(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn is_text(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}
