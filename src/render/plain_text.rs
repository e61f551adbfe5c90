// Plain-text projection of the cleaned display markup.

use std::sync::LazyLock;

use regex::Regex;

use super::escape::unescape;

static BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("static regex"));

static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</(?:p|h1|h2)>").expect("static regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Two or more blank (or space-only) lines in a row.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("static regex"));

/// Derive plain text: one line per block, breaks as line feeds, at most one
/// blank line in a row. Indentation at the start of a line is kept.
pub(crate) fn project_plain_text(html: &str) -> String {
    let text = BREAK.replace_all(html, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = unescape(&text).replace('\u{a0}', " ");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim_start_matches(['\n', '\r']).trim_end().to_string()
}
