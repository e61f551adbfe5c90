// Element handlers: classification dispatch and one handler per element group.
//
// Each handler takes an html5ever node and the threaded context and returns
// zero or more restricted markup nodes. Diagnostics are pushed onto the
// state as elements are met, so they come out in document order.

use std::io;

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

use super::tags::{classify, ElementKind};
use super::whitespace::{hoist_edge_whitespace, normalize_text, post_process, trim_run};
use super::{Context, State};
use crate::diagnostics::Diagnostic;
use crate::markup::{self, is_effectively_empty, HeadingLevel, Inline, InlineKind, Node};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Convert all children of an HTML node.
pub(crate) fn all(state: &mut State, handle: &Handle, cx: Context) -> Vec<Node> {
    let children = handle.children.borrow();
    let mut result = Vec::new();
    for child in children.iter() {
        let mut nodes = one(state, child, cx);
        result.append(&mut nodes);
    }
    result
}

/// Convert a single HTML node.
pub(crate) fn one(state: &mut State, handle: &Handle, cx: Context) -> Vec<Node> {
    match &handle.data {
        NodeData::Text { ref contents } => {
            let text = contents.borrow().to_string();
            if text.is_empty() {
                vec![]
            } else {
                vec![Node::text(normalize_text(&text, state.options.newlines))]
            }
        }
        NodeData::Element { ref name, .. } => {
            let tag = name.local.as_ref();
            dispatch_element(state, handle, tag, cx)
        }
        NodeData::Document => all(state, handle, cx),
        // Comments, doctypes, processing instructions.
        _ => vec![],
    }
}

/// Route an element to its handler based on its classification.
fn dispatch_element(state: &mut State, handle: &Handle, tag: &str, cx: Context) -> Vec<Node> {
    match classify(tag) {
        ElementKind::Root => all(state, handle, cx),
        ElementKind::Removed => {
            state.report(Diagnostic::RemovedElement { tag: tag.to_string() });
            vec![]
        }
        ElementKind::Ignored => vec![],
        ElementKind::Inline(kind) => handle_inline(state, handle, kind, cx),
        ElementKind::Heading(level) => handle_heading(state, handle, level, cx),
        ElementKind::Break => vec![Node::Break],
        ElementKind::List { ordered } => super::list::flatten_list(state, handle, ordered, cx.depth),
        ElementKind::Block => handle_block(state, handle, cx),
        ElementKind::Unknown { flow } => {
            let snippet = snippet(handle, tag, state.options.snippet_limit);
            state.report(Diagnostic::UnsupportedTag {
                tag: tag.to_string(),
                snippet,
            });
            if flow {
                handle_block(state, handle, cx)
            } else {
                all(state, handle, cx)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `b`/`strong`, `i`/`em`, `u`: canonical tag, never an empty pair.
fn handle_inline(state: &mut State, handle: &Handle, kind: InlineKind, cx: Context) -> Vec<Node> {
    let mut children = all(state, handle, cx.inline());
    post_process(&mut children);
    if children.is_empty() {
        return vec![];
    }
    hoist_edge_whitespace(Inline { kind, children })
}

/// `h1`–`h6`: level 1 stays `h1`, everything else becomes `h2`.
fn handle_heading(state: &mut State, handle: &Handle, source: u8, cx: Context) -> Vec<Node> {
    let level = HeadingLevel::clamp(source);
    if source > 2 {
        state.report(Diagnostic::DowngradedHeading {
            from: source,
            to: level.level(),
        });
    }

    let mut children = into_phrasing(all(state, handle, cx.inline()));
    post_process(&mut children);
    trim_run(&mut children);
    if is_effectively_empty(&children) {
        return vec![];
    }
    vec![Node::Heading(markup::Heading { level, children })]
}

/// Known block containers and block-level unknown elements. Transparent in
/// inline context; otherwise phrasing runs of the content become paragraphs.
fn handle_block(state: &mut State, handle: &Handle, cx: Context) -> Vec<Node> {
    if cx.inline {
        return all(state, handle, cx);
    }
    let children = all(state, handle, cx.block());
    super::wrap::wrap(children)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap blocks nested in phrasing-only content (a heading holding a list),
/// separating them with line breaks.
fn into_phrasing(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());
    let mut after_block = false;
    for node in nodes {
        match node {
            Node::Paragraph(markup::Paragraph { children })
            | Node::Heading(markup::Heading { children, .. }) => {
                if !result.is_empty() {
                    result.push(Node::Break);
                }
                result.extend(into_phrasing(children));
                after_block = true;
            }
            other => {
                if after_block {
                    result.push(Node::Break);
                    after_block = false;
                }
                result.push(other);
            }
        }
    }
    result
}

/// Outer markup of an element, cut to `limit` characters.
fn snippet(handle: &Handle, tag: &str, limit: usize) -> String {
    let markup = outer_html(handle).unwrap_or_else(|_| format!("<{tag}>"));
    truncate_chars(markup, limit)
}

fn outer_html(handle: &Handle) -> io::Result<String> {
    let mut output = Vec::new();
    serialize(
        &mut output,
        &SerializableHandle::from(handle.clone()),
        SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        },
    )?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn truncate_chars(mut text: String, limit: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(limit) {
        text.truncate(idx);
        text.push('…');
    }
    text
}

/// Get the value of an attribute on an element node.
pub(crate) fn get_attr(handle: &Handle, name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Get the tag name of an element node.
pub(crate) fn tag_name(handle: &Handle) -> Option<&str> {
    if let NodeData::Element { ref name, .. } = handle.data {
        Some(name.local.as_ref())
    } else {
        None
    }
}
