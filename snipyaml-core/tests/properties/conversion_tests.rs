//! Property-based tests for conversion round-trips
//!
//! The central guarantee of the converter: any snippet document survives the
//! trip through the editing format and back, modulo body representation
//! normalization (a line sequence and its newline-joined string are the same
//! content), and the canonical output is stable.

use proptest::prelude::*;
use snipyaml_core::{
    parse_canonical, parse_editing, render_canonical, render_editing, to_canonical_format,
    to_editing_format, Body, Snippet, SnippetDocument,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Strategy for snippet names; uppercase start keeps clear of YAML scalars
// that resolve to non-strings (true/false/null)
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9 _-]{0,15}"
}

// Strategy for prefix trigger text
fn arb_prefix() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,9}"
}

// Strategy for one body line: printable ASCII, non-empty
fn arb_line() -> impl Strategy<Value = String> {
    "[ -~]{1,40}"
}

// Strategy for a body: single-line text or a sequence of lines
fn arb_body() -> impl Strategy<Value = Body> {
    prop_oneof![
        "[ -~]{0,60}".prop_map(Body::Text),
        prop::collection::vec(arb_line(), 1..6).prop_map(Body::Lines),
    ]
}

// Strategy for an optional description
fn arb_description() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), "[ -~]{1,30}".prop_map(Some)]
}

fn arb_snippet() -> impl Strategy<Value = Snippet> {
    (arb_prefix(), arb_body(), arb_description()).prop_map(|(prefix, body, description)| Snippet {
        prefix,
        body,
        description,
    })
}

fn arb_document() -> impl Strategy<Value = SnippetDocument> {
    prop::collection::vec((arb_name(), arb_snippet()), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

// The round-trip image of a document: every body folded on the way out and
// re-split on the way back
fn normalized(doc: &SnippetDocument) -> SnippetDocument {
    doc.iter()
        .map(|(name, snippet)| {
            let mut snippet = snippet.clone();
            snippet.body = snippet.body.folded().split();
            (name.clone(), snippet)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rendering a document to the editing format and parsing it back yields
    /// the document with every body folded to a single string.
    #[test]
    fn editing_format_round_trips(doc in arb_document()) {
        let text = render_editing(&doc).unwrap();
        let parsed = parse_editing(&text, Path::new("doc.json.yaml")).unwrap();

        let expected: SnippetDocument = doc
            .iter()
            .map(|(name, snippet)| {
                let mut snippet = snippet.clone();
                snippet.body = snippet.body.folded();
                (name.clone(), snippet)
            })
            .collect();
        prop_assert_eq!(parsed, expected);
    }

    /// Rendering a document to the canonical format and parsing it back
    /// yields the document with every multi-line body split into lines.
    #[test]
    fn canonical_format_round_trips(doc in arb_document()) {
        let text = render_canonical(&doc).unwrap();
        let parsed = parse_canonical(&text, Path::new("doc.json")).unwrap();

        let expected: SnippetDocument = doc
            .iter()
            .map(|(name, snippet)| {
                let mut snippet = snippet.clone();
                snippet.body = snippet.body.split();
                (name.clone(), snippet)
            })
            .collect();
        prop_assert_eq!(parsed, expected);
    }

    /// The full file-level cycle preserves the document modulo body
    /// representation normalization, including entry order.
    #[test]
    fn file_cycle_preserves_documents(doc in arb_document()) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("cycle.json");
        fs::write(&source, render_canonical(&doc).unwrap()).unwrap();

        let editing = to_editing_format(&source, true).unwrap();
        let canonical = to_canonical_format(&editing).unwrap();

        let content = fs::read_to_string(&canonical).unwrap();
        let parsed = parse_canonical(&content, &canonical).unwrap();
        prop_assert_eq!(parsed, normalized(&doc));
    }

    /// Every line of every body survives the editing format exactly; the
    /// YAML emitter never re-wraps or truncates content.
    #[test]
    fn editing_format_preserves_lines(lines in prop::collection::vec(arb_line(), 1..8)) {
        let mut doc = SnippetDocument::new();
        doc.insert(
            "Entry".to_string(),
            Snippet::new("t", Body::Lines(lines.clone())),
        );

        let text = render_editing(&doc).unwrap();
        let parsed = parse_editing(&text, Path::new("doc.json.yaml")).unwrap();
        prop_assert_eq!(parsed["Entry"].body.to_text(), lines.join("\n"));
    }

    /// Writing the canonical form is stable: rendering the parse of its own
    /// output reproduces the output byte for byte.
    #[test]
    fn canonical_render_is_idempotent(doc in arb_document()) {
        let first = render_canonical(&doc).unwrap();
        let reparsed = parse_canonical(&first, Path::new("doc.json")).unwrap();
        let second = render_canonical(&reparsed).unwrap();
        prop_assert_eq!(first, second);
    }
}
