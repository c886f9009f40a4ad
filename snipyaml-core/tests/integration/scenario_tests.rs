//! Full editing-session scenarios against real files

use std::fs;
use std::path::Path;

use snipyaml_core::{
    on_editing_closed, on_editing_saved, parse_editing, render_editing, to_canonical_format,
    to_editing_format, Body, Namespace,
};
use tempfile::TempDir;

const PYTHON_SNIPPETS: &str = r#"{
    "say": {
        "prefix": "say",
        "body": ["print($1)", "$2"],
        "description": "print"
    }
}"#;

/// The documented session: convert `python.json`, edit the description in
/// YAML, write back, and check the rewritten canonical file field by field.
#[test]
fn test_edit_description_session() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("python.json");
    fs::write(&source, PYTHON_SNIPPETS).unwrap();

    let editing = to_editing_format(&source, true).unwrap();
    assert_eq!(editing, temp.path().join("python.json.yaml"));

    // The YAML side carries the body as one folded string
    let content = fs::read_to_string(&editing).unwrap();
    let mut doc = parse_editing(&content, &editing).unwrap();
    assert_eq!(doc["say"].prefix, "say");
    assert_eq!(doc["say"].body, Body::Text("print($1)\n$2".to_string()));
    assert_eq!(doc["say"].description.as_deref(), Some("print"));

    // The user edits the description and the file is written back
    doc["say"].description = Some("printer".to_string());
    fs::write(&editing, render_editing(&doc).unwrap()).unwrap();

    let canonical = to_canonical_format(&editing).unwrap();
    assert_eq!(canonical, source);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&source).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "say": {
                "prefix": "say",
                "body": ["print($1)", "$2"],
                "description": "printer"
            }
        })
    );
}

/// A nonexistent canonical file yields the one-entry starting template.
#[test]
fn test_new_language_starts_from_template() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("zig.json");

    let editing = to_editing_format(&source, false).unwrap();
    let content = fs::read_to_string(&editing).unwrap();
    let doc = parse_editing(&content, &editing).unwrap();

    assert_eq!(doc.len(), 1);
    let snippet = &doc["Print to console"];
    assert_eq!(snippet.prefix, "log");
    assert_eq!(snippet.body.to_text(), "console.log('$1');\n$2");
    assert!(!source.exists());
}

/// A line far beyond any default fold width survives the editing format
/// without being wrapped or truncated.
#[test]
fn test_long_line_is_not_wrapped() {
    let long_line = "x".repeat(2000);
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("python.json");
    fs::write(
        &source,
        format!(
            "{{\"wide\": {{\"prefix\": \"w\", \"body\": [\"{long_line}\", \"$2\"]}}}}"
        ),
    )
    .unwrap();

    let editing = to_editing_format(&source, true).unwrap();
    let content = fs::read_to_string(&editing).unwrap();
    let doc = parse_editing(&content, &editing).unwrap();
    assert_eq!(doc["wide"].body.to_text(), format!("{long_line}\n$2"));

    // and back: the canonical file carries the line intact
    to_canonical_format(&editing).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&source).unwrap()).unwrap();
    assert_eq!(value["wide"]["body"][0], long_line.as_str());
}

/// Save N times then close: every write-back is idempotent and the close
/// removes the editing file.
#[test]
fn test_save_save_close_session() {
    let temp = TempDir::new().unwrap();
    let ns = Namespace::user_snippets(temp.path());
    let source = temp.path().join("python.json");
    fs::write(&source, PYTHON_SNIPPETS).unwrap();

    let editing = to_editing_format(&source, true).unwrap();

    on_editing_saved(&editing, &ns).unwrap().unwrap();
    let after_first_save = fs::read(&source).unwrap();

    on_editing_saved(&editing, &ns).unwrap().unwrap();
    assert_eq!(fs::read(&source).unwrap(), after_first_save);

    on_editing_closed(&editing, &ns).unwrap().unwrap();
    assert_eq!(fs::read(&source).unwrap(), after_first_save);
    assert!(!editing.exists());
}

/// Comments in the canonical input are tolerated and dropped on round-trip.
#[test]
fn test_comments_are_dropped_on_round_trip() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("python.json");
    fs::write(
        &source,
        "{\n  // greeting snippet\n  \"say\": {\n    \"prefix\": \"say\",\n    \"body\": \"print($1)\", /* single line */\n  }\n}",
    )
    .unwrap();

    let editing = to_editing_format(&source, true).unwrap();
    to_canonical_format(&editing).unwrap();

    let rewritten = fs::read_to_string(&source).unwrap();
    assert!(!rewritten.contains("greeting"));
    assert!(!rewritten.contains("single line"));
    let value: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(value["say"]["body"], "print($1)");
}

/// Saving a file from a foreign directory or with a foreign extension is
/// ignored rather than converted.
#[test]
fn test_unmanaged_documents_are_ignored() {
    let temp = TempDir::new().unwrap();
    let ns = Namespace::user_snippets(temp.path().join("snippets"));
    fs::create_dir_all(ns.directory()).unwrap();

    let elsewhere = temp.path().join("python.json.yaml");
    fs::write(&elsewhere, "say:\n  prefix: say\n  body: hi\n").unwrap();
    assert_eq!(on_editing_saved(&elsewhere, &ns).unwrap(), None);

    let wrong_extension = ns.directory().join(Path::new("api.code-snippets.yaml"));
    fs::write(&wrong_extension, "say:\n  prefix: say\n  body: hi\n").unwrap();
    assert_eq!(on_editing_saved(&wrong_extension, &ns).unwrap(), None);
    assert!(wrong_extension.exists());
}
