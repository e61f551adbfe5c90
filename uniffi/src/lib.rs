uniffi::setup_scaffolding!();

/// Errors returned by `convert_with` when options contain invalid values.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum OptionsError {
    #[error("{field} must be one of {allowed}, got \"{value}\"")]
    InvalidOption {
        field: String,
        allowed: String,
        value: String,
    },
}

/// A lossy or normalizing decision made during conversion.
#[derive(Debug, PartialEq, uniffi::Enum)]
pub enum Diagnostic {
    /// An element with no mapping; its text was kept.
    UnsupportedTag { tag: String, snippet: String },
    /// An element removed with its content (`script`, `style`).
    RemovedElement { tag: String },
    /// A heading level above `h2` was clamped. Levels are `"h3"`…`"h6"` / `"h2"`.
    DowngradedHeading { from: String, to: String },
    /// A nested list item became an indented paragraph.
    ListFlattened { depth: u64 },
}

/// Severity of a diagnostic.
#[derive(Debug, PartialEq, uniffi::Enum)]
pub enum Severity {
    Info,
    Warning,
}

/// A diagnostic with its presentation helpers resolved.
#[derive(Debug, uniffi::Record)]
pub struct Report {
    pub diagnostic: Diagnostic,
    /// `kind` tag: `"unsupported-tag"`, `"removed-element"`, …
    pub kind: String,
    pub severity: Severity,
    /// One-line human message.
    pub message: String,
}

/// The artifacts of one conversion.
#[derive(Debug, uniffi::Record)]
pub struct Conversion {
    /// Cleaned display markup.
    pub html: String,
    /// Display markup with clipboard export styling.
    pub keep_html: String,
    /// Plain-text rendering.
    pub plain_text: String,
    /// Lossy decisions in document order.
    pub diagnostics: Vec<Report>,
}

/// Conversion options.
#[derive(uniffi::Record)]
pub struct Options {
    /// Whether whitespace runs containing a line feed collapse to `\n`.
    pub newlines: bool,
    /// Non-breaking spaces per list level (0–16).
    pub indent_width: u32,
    /// Maximum characters of an unsupported-tag snippet (at least 1).
    pub snippet_limit: u32,
}

/// Returns the default conversion options.
#[uniffi::export]
pub fn default_options() -> Options {
    let d = html2keep::Options::default();
    Options {
        newlines: d.newlines,
        indent_width: d.indent_width as u32,
        snippet_limit: d.snippet_limit as u32,
    }
}

/// Convert an HTML fragment using default options.
#[uniffi::export]
pub fn convert(html: String) -> Conversion {
    to_ffi_conversion(html2keep::convert(&html))
}

/// Convert an HTML fragment with custom options.
///
/// Returns an `OptionsError` if any option field contains an invalid value.
#[uniffi::export]
pub fn convert_with(html: String, options: Options) -> Result<Conversion, OptionsError> {
    let core_options = to_core_options(options)?;
    Ok(to_ffi_conversion(html2keep::convert_with(&html, &core_options)))
}

// --- Internal conversion helpers ---

const MAX_INDENT_WIDTH: u32 = 16;

fn to_core_options(opts: Options) -> Result<html2keep::Options, OptionsError> {
    if opts.indent_width > MAX_INDENT_WIDTH {
        return Err(OptionsError::InvalidOption {
            field: "indent_width".to_string(),
            allowed: format!("0..={MAX_INDENT_WIDTH}"),
            value: opts.indent_width.to_string(),
        });
    }
    if opts.snippet_limit == 0 {
        return Err(OptionsError::InvalidOption {
            field: "snippet_limit".to_string(),
            allowed: "1..".to_string(),
            value: opts.snippet_limit.to_string(),
        });
    }

    Ok(html2keep::Options::new()
        .with_newlines(opts.newlines)
        .with_indent_width(opts.indent_width as usize)
        .with_snippet_limit(opts.snippet_limit as usize))
}

fn to_ffi_conversion(c: html2keep::Conversion) -> Conversion {
    Conversion {
        html: c.html,
        keep_html: c.keep_html,
        plain_text: c.plain_text,
        diagnostics: c.diagnostics.into_iter().map(to_ffi_report).collect(),
    }
}

fn to_ffi_report(d: html2keep::Diagnostic) -> Report {
    let kind = d.kind().to_string();
    let message = d.to_string();
    let severity = match d.severity() {
        html2keep::Severity::Info => Severity::Info,
        html2keep::Severity::Warning => Severity::Warning,
    };
    let diagnostic = match d {
        html2keep::Diagnostic::UnsupportedTag { tag, snippet } => {
            Diagnostic::UnsupportedTag { tag, snippet }
        }
        html2keep::Diagnostic::RemovedElement { tag } => Diagnostic::RemovedElement { tag },
        html2keep::Diagnostic::DowngradedHeading { from, to } => Diagnostic::DowngradedHeading {
            from: format!("h{from}"),
            to: format!("h{to}"),
        },
        html2keep::Diagnostic::ListFlattened { depth } => Diagnostic::ListFlattened {
            depth: depth as u64,
        },
    };
    Report {
        diagnostic,
        kind,
        severity,
        message,
    }
}
