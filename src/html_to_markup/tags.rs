// Node classification over a closed tag set.
//
// Static tables only; traversal lives in handlers.rs.

use crate::markup::InlineKind;

/// What the serializer does with an element, decided by its tag name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// Synthetic roots built by the HTML5 tree builder (`html`, `head`, `body`).
    Root,
    /// Dropped with its subtree and reported (`script`, `style`).
    Removed,
    /// Dropped silently; carries no content (`meta`, `link`, `base`).
    Ignored,
    /// Bold, italic or underline.
    Inline(InlineKind),
    /// Heading with its source level (1–6).
    Heading(u8),
    Break,
    List { ordered: bool },
    /// Known block container, rendered as a paragraph.
    Block,
    /// No mapping. `flow` marks HTML block-level elements, which follow the
    /// block-container wrap policy; phrasing ones are transparent.
    Unknown { flow: bool },
}

/// Classify an element by its (lowercase) local name.
pub(crate) fn classify(tag: &str) -> ElementKind {
    match tag {
        "html" | "head" | "body" => ElementKind::Root,
        "script" | "style" => ElementKind::Removed,
        "meta" | "link" | "base" => ElementKind::Ignored,
        "b" | "strong" => ElementKind::Inline(InlineKind::Bold),
        "i" | "em" => ElementKind::Inline(InlineKind::Italic),
        "u" => ElementKind::Inline(InlineKind::Underline),
        "h1" => ElementKind::Heading(1),
        "h2" => ElementKind::Heading(2),
        "h3" => ElementKind::Heading(3),
        "h4" => ElementKind::Heading(4),
        "h5" => ElementKind::Heading(5),
        "h6" => ElementKind::Heading(6),
        "br" => ElementKind::Break,
        "ol" => ElementKind::List { ordered: true },
        "ul" => ElementKind::List { ordered: false },
        "p" | "div" | "section" | "article" | "header" | "footer" => ElementKind::Block,
        _ => ElementKind::Unknown {
            flow: is_flow_element(tag),
        },
    }
}

/// HTML block-level elements outside the supported set.
fn is_flow_element(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "aside"
            | "blockquote"
            | "caption"
            | "center"
            | "dd"
            | "details"
            | "dialog"
            | "dir"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "form"
            | "hgroup"
            | "hr"
            | "legend"
            | "li"
            | "listing"
            | "main"
            | "menu"
            | "nav"
            | "plaintext"
            | "pre"
            | "summary"
            | "table"
            | "tbody"
            | "td"
            | "tfoot"
            | "th"
            | "thead"
            | "tr"
            | "xmp"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_aliases() {
        assert_eq!(classify("strong"), ElementKind::Inline(InlineKind::Bold));
        assert_eq!(classify("em"), ElementKind::Inline(InlineKind::Italic));
        assert_eq!(classify("u"), ElementKind::Inline(InlineKind::Underline));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("h1"), ElementKind::Heading(1));
        assert_eq!(classify("h6"), ElementKind::Heading(6));
    }

    #[test]
    fn test_unknown_flow_and_phrasing() {
        assert_eq!(classify("figure"), ElementKind::Unknown { flow: true });
        assert_eq!(classify("span"), ElementKind::Unknown { flow: false });
        assert_eq!(classify("img"), ElementKind::Unknown { flow: false });
    }
}
