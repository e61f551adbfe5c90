// Restricted markup tree: the target grammar of the note application.
//
// Only seven constructs survive conversion: paragraphs, two heading levels,
// bold, italic, underline, line breaks and text. Block nodes own inline
// children; inline wrappers own inline children; leaves hold a value.

/// Heading level of the target grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    /// Clamp a source heading level (1–6) into the target grammar.
    pub fn clamp(source: u8) -> Self {
        if source <= 1 {
            HeadingLevel::H1
        } else {
            HeadingLevel::H2
        }
    }

    /// Numeric level (`1` or `2`).
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }

    /// Tag name used in the display markup.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
        }
    }
}

/// Inline formatting wrapper kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    Underline,
}

impl InlineKind {
    /// Canonical tag name.
    pub fn tag(self) -> &'static str {
        match self {
            InlineKind::Bold => "b",
            InlineKind::Italic => "i",
            InlineKind::Underline => "u",
        }
    }
}

// ---------------------------------------------------------------------------
// Node structs
// ---------------------------------------------------------------------------

/// Paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Heading (`h1` or `h2`).
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub children: Vec<Node>,
}

/// Bold, italic or underline span.
#[derive(Debug, Clone, PartialEq)]
pub struct Inline {
    pub kind: InlineKind,
    pub children: Vec<Node>,
}

/// Text run. Non-breaking spaces are kept as `U+00A0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

// ---------------------------------------------------------------------------
// Node enum
// ---------------------------------------------------------------------------

/// A node in the restricted markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Block content
    Paragraph(Paragraph),
    Heading(Heading),

    // Phrasing content
    Inline(Inline),
    Break,
    Text(Text),
}

impl Node {
    /// Build a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Returns a reference to this node's children, if it has any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::Inline(n) => Some(&n.children),
            Node::Break | Node::Text(_) => None,
        }
    }

    /// Returns a mutable reference to this node's children, if it has any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::Inline(n) => Some(&mut n.children),
            Node::Break | Node::Text(_) => None,
        }
    }

    /// Whether this node is phrasing (inline) content.
    pub fn is_phrasing(&self) -> bool {
        matches!(self, Node::Inline(_) | Node::Break | Node::Text(_))
    }

    /// Whether this node or any descendant is block content.
    pub fn contains_block(&self) -> bool {
        if !self.is_phrasing() {
            return true;
        }
        self.children()
            .is_some_and(|children| children.iter().any(Node::contains_block))
    }
}

/// Whether a run of nodes has no visible content: only breaks, whitespace,
/// non-breaking spaces, or inline wrappers around those.
pub fn is_effectively_empty(nodes: &[Node]) -> bool {
    nodes.iter().all(|node| match node {
        Node::Break => true,
        Node::Text(t) => t.value.chars().all(char::is_whitespace),
        Node::Inline(n) => is_effectively_empty(&n.children),
        Node::Paragraph(_) | Node::Heading(_) => false,
    })
}
