// Output cleaner: string-level post-pass over the raw display markup.
//
// Trims whitespace hugging block and inline tags and removes paragraphs that
// ended up with no visible content. Idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace right after `<p>`, `<h1>`, `<h2>` or a break.
static AFTER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<(?:p|h1|h2)>|<br />)[ \t\r\n]+").expect("static regex"));

/// Whitespace right before a closing tag or a break.
static BEFORE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\r\n]+(</(?:h1|h2|p|b|i|u)>|<br />)").expect("static regex")
});

/// Paragraph holding only whitespace, non-breaking spaces, breaks or empty
/// inline tags.
static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<p>(?:\s|&nbsp;|&#160;|<br />|</?(?:b|i|u)>)*</p>").expect("static regex")
});

/// Clean raw display markup.
pub(crate) fn clean(raw: &str) -> String {
    let trimmed = AFTER_OPEN.replace_all(raw, "$1");
    let trimmed = BEFORE_CLOSE.replace_all(&trimmed, "$1");
    let without_empty = EMPTY_PARAGRAPH.replace_all(&trimmed, "");
    without_empty.trim().to_string()
}
