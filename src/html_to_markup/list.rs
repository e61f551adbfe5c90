// List flattening.
//
// The target editor has no nested lists, so every list becomes a flat run of
// paragraphs: indentation (non-breaking spaces, so it survives into plain
// text) + a literal `n. ` or `- ` marker + the item's inline content.

use markup5ever_rcdom::Handle;

use super::handlers::{self, get_attr, tag_name};
use super::whitespace::{post_process, NBSP};
use super::wrap::{pieces, Piece};
use super::{Context, State};
use crate::diagnostics::Diagnostic;
use crate::markup::{self, Node};

/// Flatten an `ol`/`ul` element at the given nesting depth.
pub(crate) fn flatten_list(
    state: &mut State,
    list: &Handle,
    ordered: bool,
    depth: usize,
) -> Vec<Node> {
    let items: Vec<Handle> = list
        .children
        .borrow()
        .iter()
        .filter(|child| tag_name(child) == Some("li"))
        .cloned()
        .collect();
    if items.is_empty() {
        return vec![];
    }

    let indent: String = std::iter::repeat(NBSP)
        .take(state.options.indent_width * depth)
        .collect();
    let mut number = if ordered { start_offset(list) } else { 1 };
    let mut result = Vec::new();

    for item in &items {
        if depth >= 1 {
            state.report(Diagnostic::ListFlattened { depth });
        }
        let marker = if ordered {
            let marker = format!("{number}. ");
            number = number.saturating_add(1);
            marker
        } else {
            "- ".to_string()
        };
        flatten_item(state, item, &format!("{indent}{marker}"), depth, &mut result);
    }

    result
}

/// Emit one item: its marker line, then everything else it holds in document
/// order (blocks, nested list paragraphs, further phrasing runs).
///
/// The marker line carries the item's first phrasing run. Blocks that come
/// before that run stay in front of the marker line; an item with no
/// phrasing at all gets the placeholder.
fn flatten_item(state: &mut State, item: &Handle, prefix: &str, depth: usize, out: &mut Vec<Node>) {
    let cx = Context {
        inline: true,
        depth: depth + 1,
    };
    let mut content = Vec::new();
    for child in item.children.borrow().iter() {
        match list_kind(child) {
            Some(ordered) => content.append(&mut flatten_list(state, child, ordered, depth + 1)),
            None => content.append(&mut handlers::one(state, child, cx)),
        }
    }

    let mut label = None;
    let mut before = Vec::new();
    let mut after = Vec::new();
    for piece in pieces(content) {
        match piece {
            Piece::Run(run) if label.is_none() => label = Some(run),
            other if label.is_none() => before.push(other.into_node()),
            other => after.push(other.into_node()),
        }
    }
    let inline = match label {
        Some(run) => run,
        None => {
            after = std::mem::take(&mut before);
            vec![Node::text(NBSP.to_string())]
        }
    };

    let mut children = Vec::with_capacity(inline.len() + 1);
    children.push(Node::text(prefix));
    children.extend(inline);
    post_process(&mut children);

    out.append(&mut before);
    out.push(Node::Paragraph(markup::Paragraph { children }));
    out.append(&mut after);
}

/// `Some(ordered)` when the node is a list element.
fn list_kind(handle: &Handle) -> Option<bool> {
    match tag_name(handle) {
        Some("ol") => Some(true),
        Some("ul") => Some(false),
        _ => None,
    }
}

/// Declared `start` of an ordered list; 1 when absent or not a number.
fn start_offset(list: &Handle) -> i64 {
    get_attr(list, "start")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(1)
}
