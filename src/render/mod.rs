// Restricted markup → output artifacts.
//
// `render` turns the block tree into raw display markup; `clean` is the
// string-level post-pass that yields the canonical display HTML. The
// clipboard and plain-text projections both derive from that cleaned
// markup and never from the source tree, so the three outputs cannot
// disagree on structure.

pub(crate) mod clean;
pub(crate) mod clipboard;
pub(crate) mod escape;
pub(crate) mod plain_text;

use crate::markup::Node;

pub(crate) use clean::clean;
pub(crate) use clipboard::project_clipboard;
pub(crate) use plain_text::project_plain_text;

/// Serialize restricted markup nodes to raw display markup.
pub(crate) fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node);
    }
    out
}

fn render_node(out: &mut String, node: &Node) {
    match node {
        Node::Paragraph(n) => wrapped(out, "p", &n.children),
        Node::Heading(n) => wrapped(out, n.level.tag(), &n.children),
        Node::Inline(n) => wrapped(out, n.kind.tag(), &n.children),
        Node::Break => out.push_str("<br />"),
        Node::Text(t) => out.push_str(&escape::escape_text(&t.value)),
    }
}

fn wrapped(out: &mut String, tag: &str, children: &[Node]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for child in children {
        render_node(out, child);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
