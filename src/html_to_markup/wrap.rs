// Implicit paragraph grouping and block-in-inline resolution.
//
// A block container's content is a mix of phrasing nodes and blocks.
// Phrasing runs become paragraphs; blocks pass through. Inline wrappers that
// contain blocks are split so the wrapper distributes around each block.

use super::whitespace::{hoist_edge_whitespace, post_process, trim_run};
use crate::markup::{self, is_effectively_empty, Inline, InlineKind, Node};

/// A stretch of wrapped content.
#[derive(Debug, PartialEq)]
pub(crate) enum Piece {
    /// Trimmed phrasing run with visible content.
    Run(Vec<Node>),
    /// Block passed through as-is.
    Block(Node),
}

impl Piece {
    pub(crate) fn into_node(self) -> Node {
        match self {
            Piece::Run(children) => Node::Paragraph(markup::Paragraph { children }),
            Piece::Block(node) => node,
        }
    }
}

/// Wrap mixed content: phrasing runs become paragraphs, blocks pass through.
/// Runs with no visible content are dropped.
pub(crate) fn wrap(nodes: Vec<Node>) -> Vec<Node> {
    pieces(nodes).into_iter().map(Piece::into_node).collect()
}

/// Split mixed content into phrasing runs and blocks, in document order.
pub(crate) fn pieces(nodes: Vec<Node>) -> Vec<Piece> {
    let mut result = Vec::new();
    let mut phrasing_run: Vec<Node> = Vec::new();

    for node in flatten(nodes) {
        if node.is_phrasing() {
            phrasing_run.push(node);
        } else {
            flush(&mut result, &mut phrasing_run);
            result.push(Piece::Block(node));
        }
    }
    flush(&mut result, &mut phrasing_run);

    result
}

fn flush(result: &mut Vec<Piece>, phrasing_run: &mut Vec<Node>) {
    if phrasing_run.is_empty() {
        return;
    }
    let mut children = std::mem::take(phrasing_run);
    post_process(&mut children);
    trim_run(&mut children);
    if !is_effectively_empty(&children) {
        result.push(Piece::Run(children));
    }
}

/// Split inline wrappers that straddle block content.
fn flatten(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Inline(inline) if inline.children.iter().any(Node::contains_block) => {
                result.append(&mut split_straddling(inline));
            }
            other => result.push(other),
        }
    }
    result
}

/// Distribute an inline wrapper around the blocks it contains:
/// `b[text, p[x], text]` becomes `b[text], p[b[x]], b[text]`.
fn split_straddling(inline: Inline) -> Vec<Node> {
    let kind = inline.kind;
    let mut result = Vec::new();
    let mut phrasing_run: Vec<Node> = Vec::new();

    for child in flatten(inline.children) {
        if child.is_phrasing() {
            phrasing_run.push(child);
            continue;
        }
        if !phrasing_run.is_empty() {
            let run = std::mem::take(&mut phrasing_run);
            result.append(&mut rewrap(kind, run));
        }
        result.push(wrap_inside_block(kind, child));
    }

    if !phrasing_run.is_empty() {
        result.append(&mut rewrap(kind, phrasing_run));
    }

    result
}

/// Re-wrap a phrasing run, keeping its edge whitespace outside the wrapper.
fn rewrap(kind: InlineKind, run: Vec<Node>) -> Vec<Node> {
    hoist_edge_whitespace(Inline {
        kind,
        children: run,
    })
}

/// Place the inline wrapper inside a block, around the block's content.
fn wrap_inside_block(kind: InlineKind, mut block: Node) -> Node {
    if let Some(children) = block.children_mut() {
        if !is_effectively_empty(children) {
            let inner = std::mem::take(children);
            children.push(Node::Inline(Inline {
                kind,
                children: inner,
            }));
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Heading, HeadingLevel, Paragraph};

    fn bold(children: Vec<Node>) -> Node {
        Node::Inline(Inline {
            kind: InlineKind::Bold,
            children,
        })
    }

    #[test]
    fn test_phrasing_run_becomes_paragraph() {
        let nodes = wrap(vec![Node::text(" a "), bold(vec![Node::text("b")])]);
        assert_eq!(
            nodes,
            vec![Node::Paragraph(Paragraph {
                children: vec![Node::text("a "), bold(vec![Node::text("b")])],
            })]
        );
    }

    #[test]
    fn test_whitespace_run_between_blocks_dropped() {
        let heading = Node::Heading(Heading {
            level: HeadingLevel::H1,
            children: vec![Node::text("T")],
        });
        let nodes = wrap(vec![heading.clone(), Node::text("\n  "), Node::Break]);
        assert_eq!(nodes, vec![heading]);
    }

    #[test]
    fn test_inline_straddling_block_is_split() {
        let para = Node::Paragraph(Paragraph {
            children: vec![Node::text("x")],
        });
        let nodes = wrap(vec![bold(vec![Node::text("a"), para, Node::text("c")])]);
        assert_eq!(
            nodes,
            vec![
                Node::Paragraph(Paragraph {
                    children: vec![bold(vec![Node::text("a")])],
                }),
                Node::Paragraph(Paragraph {
                    children: vec![bold(vec![Node::text("x")])],
                }),
                Node::Paragraph(Paragraph {
                    children: vec![bold(vec![Node::text("c")])],
                }),
            ]
        );
    }
}
