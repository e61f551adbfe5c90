// Diagnostics: one record per lossy or normalizing decision.
//
// Records are collected into a side list while the tree is walked, in
// document (pre-order) order. They are never embedded in the output.

use std::fmt;

/// How much a diagnostic matters to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Expected normalization; content is intact.
    Info,
    /// Structure or formatting was lost.
    Warning,
}

/// A lossy or normalizing decision made during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum Diagnostic {
    /// An element with no mapping; its wrapper was dropped, its text kept.
    UnsupportedTag {
        tag: String,
        /// Outer markup of the element, truncated.
        snippet: String,
    },
    /// An element dropped with its whole subtree (`script`, `style`).
    RemovedElement { tag: String },
    /// A heading level above the supported maximum was clamped.
    DowngradedHeading {
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_level"))]
        from: u8,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_level"))]
        to: u8,
    },
    /// A list item nested in another list became an indented paragraph.
    ListFlattened { depth: usize },
}

impl Diagnostic {
    /// The `kind` tag presentation layers switch on.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::UnsupportedTag { .. } => "unsupported-tag",
            Diagnostic::RemovedElement { .. } => "removed-element",
            Diagnostic::DowngradedHeading { .. } => "downgraded-heading",
            Diagnostic::ListFlattened { .. } => "list-flattened",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnsupportedTag { .. } => Severity::Warning,
            Diagnostic::RemovedElement { .. } | Diagnostic::DowngradedHeading { .. } => {
                Severity::Info
            }
            Diagnostic::ListFlattened { depth } if *depth <= 1 => Severity::Info,
            Diagnostic::ListFlattened { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedTag { tag, snippet } => {
                write!(f, "<{tag}> is not supported, kept its text: {snippet}")
            }
            Diagnostic::RemovedElement { tag } => write!(f, "<{tag}> removed with its content"),
            Diagnostic::DowngradedHeading { from, to } => {
                write!(f, "heading h{from} downgraded to h{to}")
            }
            Diagnostic::ListFlattened { depth } => {
                write!(f, "list item at depth {depth} flattened into an indented paragraph")
            }
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_level<S: serde::Serializer>(level: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("h{level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        let cases = [
            (
                Diagnostic::UnsupportedTag {
                    tag: "img".into(),
                    snippet: "<img>".into(),
                },
                "unsupported-tag",
            ),
            (Diagnostic::RemovedElement { tag: "script".into() }, "removed-element"),
            (Diagnostic::DowngradedHeading { from: 3, to: 2 }, "downgraded-heading"),
            (Diagnostic::ListFlattened { depth: 1 }, "list-flattened"),
        ];
        for (diagnostic, kind) in cases {
            assert_eq!(diagnostic.kind(), kind);
        }
    }

    #[test]
    fn test_list_depth_drives_severity() {
        assert_eq!(Diagnostic::ListFlattened { depth: 1 }.severity(), Severity::Info);
        assert_eq!(Diagnostic::ListFlattened { depth: 2 }.severity(), Severity::Warning);
        assert_eq!(
            Diagnostic::RemovedElement { tag: "style".into() }.severity(),
            Severity::Info
        );
    }

    #[test]
    fn test_display_heading() {
        let d = Diagnostic::DowngradedHeading { from: 4, to: 2 };
        assert_eq!(d.to_string(), "heading h4 downgraded to h2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_shapes() {
        let json = serde_json::to_value(Diagnostic::DowngradedHeading { from: 3, to: 2 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "downgraded-heading", "from": "h3", "to": "h2"})
        );

        let json = serde_json::to_value(Diagnostic::ListFlattened { depth: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "list-flattened", "depth": 1}));

        let json = serde_json::to_value(Diagnostic::UnsupportedTag {
            tag: "figure".into(),
            snippet: "<figure></figure>".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "unsupported-tag", "tag": "figure", "snippet": "<figure></figure>"})
        );
    }
}
