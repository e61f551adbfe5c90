// Shared test helpers for html2keep.

use std::fs;
use std::path::Path;

use html2keep::{Diagnostic, Options};

/// A fixture's input, expected artifacts and options.
pub struct Fixture {
    pub input: String,
    pub expected_html: String,
    pub expected_text: String,
    /// One summary line per diagnostic, see [`summarize`].
    pub expected_diagnostics: Vec<String>,
    pub options: Options,
}

/// Load a test fixture.
///
/// Fixture directories contain `input.html`, `output.html`, `output.txt` and
/// optionally `diagnostics.txt` and `options.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let read = |file: &str| {
        fs::read_to_string(base.join(file))
            .unwrap_or_else(|_| panic!("Missing fixture: {}/{}", name, file))
    };

    let input = read("input.html");
    let expected_html = strip_final_newline(read("output.html"));
    let expected_text = strip_final_newline(read("output.txt"));
    let expected_diagnostics = fs::read_to_string(base.join("diagnostics.txt"))
        .map(|s| s.lines().filter(|l| !l.is_empty()).map(String::from).collect())
        .unwrap_or_default();

    let mut options = Options::default();
    if let Ok(json_str) = fs::read_to_string(base.join("options.json")) {
        if let Ok(val) = serde_json::from_str::<serde_json::Value>(&json_str) {
            if let Some(b) = val.get("newlines").and_then(|v| v.as_bool()) {
                options.newlines = b;
            }
            if let Some(n) = val.get("indent_width").and_then(|v| v.as_u64()) {
                options.indent_width = n as usize;
            }
            if let Some(n) = val.get("snippet_limit").and_then(|v| v.as_u64()) {
                options.snippet_limit = n as usize;
            }
        }
    }

    Fixture {
        input,
        expected_html,
        expected_text,
        expected_diagnostics,
        options,
    }
}

/// Snippet-free one-line summary of a diagnostic, e.g. `unsupported-tag span`.
pub fn summarize(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::UnsupportedTag { tag, .. } | Diagnostic::RemovedElement { tag } => {
            format!("{} {}", diagnostic.kind(), tag)
        }
        Diagnostic::DowngradedHeading { from, to } => {
            format!("{} h{} h{}", diagnostic.kind(), from, to)
        }
        Diagnostic::ListFlattened { depth } => format!("{} {}", diagnostic.kind(), depth),
    }
}

fn strip_final_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
    }
    s
}
