// Clipboard HTML projection.
//
// Re-parses the cleaned display markup and decorates every paragraph and
// heading the way the note application's own clipboard export does: a
// left-to-right block with fixed line height and no margins, its content
// wrapped in one span carrying the font styling of the block kind.

use std::io::{self, Write};

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

use super::escape::escape_text;
use crate::html_to_markup::parse_html;

/// Style on every block element.
pub const BLOCK_STYLE: &str = "line-height:1.38;margin-top:0pt;margin-bottom:0pt;";

/// Span style inside `h1`.
pub const HEADING_1_STYLE: &str = "font-size:15pt;font-family:'Google Sans',Roboto,Arial,sans-serif;color:#202124;background-color:transparent;font-weight:700;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// Span style inside `h2`.
pub const HEADING_2_STYLE: &str = "font-size:13pt;font-family:'Google Sans',Roboto,Arial,sans-serif;color:#202124;background-color:transparent;font-weight:700;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// Span style inside `p`.
pub const BODY_STYLE: &str = "font-size:11pt;font-family:Roboto,Arial,sans-serif;color:#202124;background-color:transparent;font-weight:400;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// Project cleaned display markup into the clipboard HTML payload.
pub(crate) fn project_clipboard(html: &str) -> io::Result<String> {
    let dom = parse_html(html);
    let mut output = Vec::with_capacity(html.len() * 4);
    project_node(&mut output, &dom.document)?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn project_node(out: &mut Vec<u8>, handle: &Handle) -> io::Result<()> {
    match &handle.data {
        NodeData::Document => project_children(out, handle),
        NodeData::Element { ref name, .. } => {
            let tag = name.local.as_ref();
            match (tag, span_style(tag)) {
                (_, Some(style)) => {
                    write!(
                        out,
                        r#"<{tag} dir="ltr" style="{BLOCK_STYLE}"><span style="{style}">"#
                    )?;
                    serialize_scoped(out, handle, TraversalScope::ChildrenOnly(None))?;
                    write!(out, "</span></{tag}>")
                }
                ("html" | "head" | "body", None) => project_children(out, handle),
                _ => serialize_scoped(out, handle, TraversalScope::IncludeNode),
            }
        }
        NodeData::Text { ref contents } => {
            out.write_all(escape_text(&contents.borrow()).as_bytes())
        }
        _ => Ok(()),
    }
}

fn project_children(out: &mut Vec<u8>, handle: &Handle) -> io::Result<()> {
    for child in handle.children.borrow().iter() {
        project_node(out, child)?;
    }
    Ok(())
}

fn serialize_scoped(out: &mut Vec<u8>, handle: &Handle, scope: TraversalScope) -> io::Result<()> {
    serialize(
        out,
        &SerializableHandle::from(handle.clone()),
        SerializeOpts {
            traversal_scope: scope,
            ..Default::default()
        },
    )
}

fn span_style(tag: &str) -> Option<&'static str> {
    match tag {
        "h1" => Some(HEADING_1_STYLE),
        "h2" => Some(HEADING_2_STYLE),
        "p" => Some(BODY_STYLE),
        _ => None,
    }
}
