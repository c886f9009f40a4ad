//! Snippet model: named template expansions triggered by a prefix.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A snippet document: snippet name mapped to its definition.
///
/// Insertion order is preserved end-to-end; the order of entries is visible
/// to the user as menu and file ordering.
pub type SnippetDocument = IndexMap<String, Snippet>;

/// A single snippet definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Trigger text typed by the user to invoke the snippet
    pub prefix: String,
    /// Template content, as a single string or one string per line
    pub body: Body,
    /// Optional free-text description, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Snippet {
    /// Creates a new snippet with the given prefix and body
    #[must_use]
    pub fn new(prefix: impl Into<String>, body: Body) -> Self {
        Self {
            prefix: prefix.into(),
            body,
            description: None,
        }
    }

    /// Sets the description for this snippet
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Snippet body content.
///
/// The two representations are interchangeable: joining `Lines` with `\n`
/// yields the `Text` form and splitting `Text` on `\n` yields `Lines`.
/// Canonical files prefer a line sequence for multi-line content; the YAML
/// editing format always carries a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    /// A single string, possibly with embedded newlines
    Text(String),
    /// One string per line
    Lines(Vec<String>),
}

impl Body {
    /// Joins a line sequence into a single newline-separated string.
    ///
    /// A `Text` body is returned unchanged.
    #[must_use]
    pub fn folded(&self) -> Self {
        match self {
            Self::Lines(lines) => Self::Text(lines.join("\n")),
            Self::Text(text) => Self::Text(text.clone()),
        }
    }

    /// Splits multi-line text into one string per line.
    ///
    /// Text without a newline stays a plain string; both forms are legal in
    /// the canonical format. A `Lines` body is returned unchanged.
    #[must_use]
    pub fn split(&self) -> Self {
        match self {
            Self::Text(text) if text.contains('\n') => {
                Self::Lines(text.split('\n').map(str::to_string).collect())
            }
            other => other.clone(),
        }
    }

    /// The body content as a single newline-joined string
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

/// The built-in starting template used when no canonical file exists yet.
///
/// Contains exactly one entry so the user always has something to edit.
#[must_use]
pub fn default_document() -> SnippetDocument {
    let mut doc = SnippetDocument::new();
    doc.insert(
        "Print to console".to_string(),
        Snippet::new(
            "log",
            Body::Lines(vec!["console.log('$1');".to_string(), "$2".to_string()]),
        )
        .with_description("Log output to console"),
    );
    doc
}
