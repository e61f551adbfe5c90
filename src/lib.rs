// html2keep: rich-text HTML to note-app restricted markup converter.
//
// Architecture:
//   HTML string → html5ever parse → HTML tree → html_to_markup (+ diagnostics)
//     → restricted markup → render → clean → display HTML
//                                             ├→ clipboard projection → keep HTML
//                                             └→ plain-text projection → plain text
//
// The target editor accepts paragraphs, two heading levels, bold, italic,
// underline and line breaks. Everything else is simplified, flattened or
// dropped, and every lossy decision is reported as a `Diagnostic`.

pub mod diagnostics;
mod html_to_markup;
pub mod markup;
mod render;

use std::sync::LazyLock;

use regex::Regex;

pub use diagnostics::{Diagnostic, Severity};
pub use render::clipboard::{BLOCK_STYLE, BODY_STYLE, HEADING_1_STYLE, HEADING_2_STYLE};

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Whether whitespace runs containing a line feed collapse to `\n`
    /// instead of a space. Default: `false`.
    pub newlines: bool,
    /// Non-breaking spaces of indentation per list nesting level. Default: `4`.
    pub indent_width: usize,
    /// Maximum characters of outer markup kept in an unsupported-tag
    /// snippet. Default: `80`.
    pub snippet_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            newlines: false,
            indent_width: 4,
            snippet_limit: 80,
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to preserve line feeds in whitespace normalization.
    pub fn with_newlines(mut self, newlines: bool) -> Self {
        self.newlines = newlines;
        self
    }

    /// Set the indentation width per list level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the unsupported-tag snippet length.
    pub fn with_snippet_limit(mut self, limit: usize) -> Self {
        self.snippet_limit = limit;
        self
    }
}

/// The artifacts of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Conversion {
    /// Cleaned display markup.
    pub html: String,
    /// Display markup decorated with the clipboard export styling.
    pub keep_html: String,
    /// Plain-text rendering.
    pub plain_text: String,
    /// Lossy decisions, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Whether every artifact is empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
            && self.keep_html.is_empty()
            && self.plain_text.is_empty()
            && self.diagnostics.is_empty()
    }

    /// HTML for a clipboard write: the styled payload, or the display markup
    /// when no styled payload exists.
    pub fn clipboard_html(&self) -> &str {
        if self.keep_html.is_empty() {
            &self.html
        } else {
            &self.keep_html
        }
    }
}

/// Convert an HTML fragment using default options.
///
/// # Examples
///
/// ```
/// let out = html2keep::convert("<h1>Title</h1><div>Body <strong>text</strong></div>");
/// assert_eq!(out.html, "<h1>Title</h1><p>Body <b>text</b></p>");
/// assert_eq!(out.plain_text, "Title\nBody text");
/// assert!(out.diagnostics.is_empty());
/// ```
pub fn convert(html: &str) -> Conversion {
    convert_with(html, &Options::default())
}

/// Convert an HTML fragment with custom options. Never fails: unsupported
/// input degrades to diagnostics.
///
/// # Examples
///
/// ```
/// use html2keep::{convert_with, Options};
///
/// let out = convert_with("<ul><li>a<ul><li>b</li></ul></li></ul>", &Options::new().with_indent_width(2));
/// assert_eq!(out.plain_text, "- a\n  - b");
/// ```
pub fn convert_with(html: &str, options: &Options) -> Conversion {
    if is_blank(html) {
        #[cfg(feature = "tracing")]
        tracing::debug!(input_len = html.len(), "blank input, skipping parse");
        return Conversion::default();
    }

    let (blocks, diagnostics) = html_to_markup(html, options);
    let html_out = clean(&markup_to_html(&blocks));
    let keep_html = match render::project_clipboard(&html_out) {
        Ok(keep) => keep,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "clipboard projection failed, using display markup");
            html_out.clone()
        }
    };
    let plain_text = render::project_plain_text(&html_out);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        input_len = html.len(),
        output_len = html_out.len(),
        diagnostics = diagnostics.len(),
        "converted"
    );

    Conversion {
        html: html_out,
        keep_html,
        plain_text,
        diagnostics,
    }
}

/// Parse HTML and transform it into restricted markup blocks plus the
/// diagnostics recorded on the way.
pub fn html_to_markup(html: &str, options: &Options) -> (Vec<markup::Node>, Vec<Diagnostic>) {
    let transform_options = html_to_markup::TransformOptions {
        newlines: options.newlines,
        indent_width: options.indent_width,
        snippet_limit: options.snippet_limit,
    };
    html_to_markup::transform(html, transform_options)
}

/// Serialize restricted markup blocks to raw (uncleaned) display markup.
pub fn markup_to_html(blocks: &[markup::Node]) -> String {
    render::render(blocks)
}

/// Clean raw display markup: trim whitespace around tags and drop empty
/// paragraphs. Idempotent.
pub fn clean(raw: &str) -> String {
    render::clean(raw)
}

/// Markup the HTML tokenizer reads as a tag, comment or declaration; a `<`
/// followed by anything else is text.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z!/?][^>]*>").expect("static regex"));

static NBSP_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:nbsp|#160|#[xX]0*[aA]0);").expect("static regex"));

/// Whether the input has no text once tags are stripped (only whitespace and
/// non-breaking spaces).
fn is_blank(html: &str) -> bool {
    let text = TAG.replace_all(html, "");
    let text = NBSP_ENTITY.replace_all(&text, "");
    text.chars().all(char::is_whitespace)
}
