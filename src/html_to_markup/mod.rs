// HTML tree → restricted markup transform.
//
// Parses HTML via html5ever and walks the resulting tree, classifying each
// node and dispatching it to a handler that produces restricted markup
// nodes. Lists are flattened on the way; lossy decisions are recorded as
// diagnostics in traversal order.

pub(crate) mod handlers;
pub(crate) mod list;
pub(crate) mod tags;
pub(crate) mod whitespace;
pub(crate) mod wrap;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::RcDom;

use crate::diagnostics::Diagnostic;
use crate::markup;

/// Options for the HTML → restricted markup transformation.
#[derive(Debug, Clone)]
pub(crate) struct TransformOptions {
    /// Whether whitespace runs containing a line feed collapse to `\n`.
    pub newlines: bool,
    /// Non-breaking spaces per list depth.
    pub indent_width: usize,
    /// Maximum characters kept in an unsupported-tag snippet.
    pub snippet_limit: usize,
}

/// Transformation state threaded through all handlers.
pub(crate) struct State {
    pub options: TransformOptions,
    pub diagnostics: Vec<Diagnostic>,
}

impl State {
    fn new(options: TransformOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = diagnostic.kind(), "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Serialization context passed down the recursion by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Context {
    /// Inside a phrasing position: block containers do not open paragraphs.
    pub inline: bool,
    /// List nesting level of the next list met.
    pub depth: usize,
}

impl Context {
    fn root() -> Self {
        Self {
            inline: false,
            depth: 0,
        }
    }

    pub fn inline(self) -> Self {
        Self {
            inline: true,
            ..self
        }
    }

    pub fn block(self) -> Self {
        Self {
            inline: false,
            ..self
        }
    }
}

/// Parse an HTML string and transform it into blocks of restricted markup.
pub(crate) fn transform(html: &str, options: TransformOptions) -> (Vec<markup::Node>, Vec<Diagnostic>) {
    let dom = parse_html(html);
    let mut state = State::new(options);

    let children = handlers::all(&mut state, &dom.document, Context::root());
    let blocks = wrap::wrap(children);

    (blocks, state.diagnostics)
}

/// Parse an HTML string into an html5ever RcDom.
pub(crate) fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Heading, HeadingLevel, Inline, InlineKind, Node, Paragraph};

    fn run(html: &str) -> (Vec<Node>, Vec<Diagnostic>) {
        transform(
            html,
            TransformOptions {
                newlines: false,
                indent_width: 4,
                snippet_limit: 80,
            },
        )
    }

    #[test]
    fn test_root_text_is_wrapped() {
        let (blocks, diagnostics) = run("Hello");
        assert_eq!(
            blocks,
            vec![Node::Paragraph(Paragraph {
                children: vec![Node::text("Hello")],
            })]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_heading_and_div() {
        let (blocks, _) = run("<h1>Title</h1><div>Body <strong>text</strong></div>");
        assert_eq!(
            blocks,
            vec![
                Node::Heading(Heading {
                    level: HeadingLevel::H1,
                    children: vec![Node::text("Title")],
                }),
                Node::Paragraph(Paragraph {
                    children: vec![
                        Node::text("Body "),
                        Node::Inline(Inline {
                            kind: InlineKind::Bold,
                            children: vec![Node::text("text")],
                        }),
                    ],
                }),
            ]
        );
    }

    #[test]
    fn test_spans_stay_in_one_paragraph() {
        let (blocks, diagnostics) = run("<p><span>a</span> <span>b</span></p>");
        assert_eq!(
            blocks,
            vec![Node::Paragraph(Paragraph {
                children: vec![Node::text("a b")],
            })]
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_script_in_head_is_reported() {
        let (blocks, diagnostics) = run("<script>alert(1)</script><p>x</p>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::RemovedElement {
                tag: "script".into()
            }]
        );
    }

    #[test]
    fn test_nested_list_in_inline_is_split() {
        let (blocks, _) = run("<b><ul><li>one</li></ul></b>");
        assert_eq!(
            blocks,
            vec![Node::Paragraph(Paragraph {
                children: vec![Node::Inline(Inline {
                    kind: InlineKind::Bold,
                    children: vec![Node::text("- one")],
                })],
            })]
        );
    }
}
