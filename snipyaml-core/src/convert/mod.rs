//! Conversion engine between canonical snippet files and their YAML editing
//! representation.
//!
//! Canonical files are comment-tolerant JSON where a multi-line body is a
//! sequence of lines; the editing format is YAML where every body is a
//! single string (multi-line bodies appear as a literal block scalar, so no
//! line is ever re-wrapped at a fold column). The editing file lives next to
//! its canonical sibling under the fixed `.yaml` suffix.
//!
//! The parse/render halves are pure and operate on in-memory text; the
//! `to_*_format` operations add the file naming convention and I/O. No state
//! survives between calls.

mod jsonc;

pub use jsonc::strip_jsonc;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ConvertError, ConvertResult};
use crate::models::{default_document, Body, SnippetDocument};
use crate::namespace::EDITING_EXTENSION;

/// Parses canonical (comment-tolerant JSON) text into a snippet document.
///
/// `path` is used for error context only.
///
/// # Errors
///
/// Returns `ConvertError::MalformedSource` when the text does not parse.
pub fn parse_canonical(content: &str, path: &Path) -> ConvertResult<SnippetDocument> {
    let stripped = strip_jsonc(content);
    serde_json::from_str(&stripped).map_err(|e| ConvertError::MalformedSource {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parses editing-format (YAML) text into a snippet document.
///
/// # Errors
///
/// Returns `ConvertError::MalformedEditing` when the text does not parse.
pub fn parse_editing(content: &str, path: &Path) -> ConvertResult<SnippetDocument> {
    serde_yaml::from_str(content).map_err(|e| ConvertError::MalformedEditing {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Renders a document in the editing format.
///
/// Every line-sequence body is folded into a single newline-joined string
/// first; the YAML emitter writes multi-line strings as literal block
/// scalars, which keeps arbitrarily long lines intact.
///
/// # Errors
///
/// Returns `ConvertError::Serialize` when YAML emission fails.
pub fn render_editing(doc: &SnippetDocument) -> ConvertResult<String> {
    let folded = map_bodies(doc, Body::folded);
    serde_yaml::to_string(&folded).map_err(|e| ConvertError::Serialize(e.to_string()))
}

/// Renders a document in the canonical format: pretty-printed JSON with a
/// trailing newline, entry order matching the input document.
///
/// Every multi-line string body is split into a line sequence first;
/// single-line bodies stay plain strings.
///
/// # Errors
///
/// Returns `ConvertError::Serialize` when JSON emission fails.
pub fn render_canonical(doc: &SnippetDocument) -> ConvertResult<String> {
    let split = map_bodies(doc, Body::split);
    let mut text =
        serde_json::to_string_pretty(&split).map_err(|e| ConvertError::Serialize(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Converts a canonical snippet file into its sibling YAML editing file.
///
/// When `source_exists` is false the built-in starting template is used
/// instead of reading `source_path`, so the user always gets something to
/// edit. The editing file is fully overwritten. Returns the editing path.
///
/// # Errors
///
/// Returns `ConvertError::MalformedSource` when the canonical file exists
/// but does not parse (no editing file is written in that case), or a
/// `Read`/`Write` error for failed I/O.
pub fn to_editing_format(source_path: &Path, source_exists: bool) -> ConvertResult<PathBuf> {
    let doc = if source_exists {
        let content = fs::read_to_string(source_path).map_err(|e| ConvertError::Read {
            path: source_path.to_path_buf(),
            source: e,
        })?;
        parse_canonical(&content, source_path)?
    } else {
        default_document()
    };

    let editing_path = editing_path_for(source_path);
    let text = render_editing(&doc)?;
    fs::write(&editing_path, text).map_err(|e| ConvertError::Write {
        path: editing_path.clone(),
        source: e,
    })?;
    info!(
        path = %editing_path.display(),
        entries = doc.len(),
        "wrote editing file"
    );
    Ok(editing_path)
}

/// Writes the canonical sibling of a YAML editing file.
///
/// The canonical path is the editing path with its `.yaml` suffix stripped.
/// Output is byte-stable for unchanged input. Returns the canonical path.
///
/// # Errors
///
/// Returns `ConvertError::MalformedEditing` when the editing file does not
/// parse; the canonical file is left untouched and the editing file is not
/// removed, so the user's edits are preserved.
pub fn to_canonical_format(editing_path: &Path) -> ConvertResult<PathBuf> {
    let content = fs::read_to_string(editing_path).map_err(|e| ConvertError::Read {
        path: editing_path.to_path_buf(),
        source: e,
    })?;
    let doc = parse_editing(&content, editing_path)?;

    let canonical_path = canonical_path_for(editing_path);
    let text = render_canonical(&doc)?;
    fs::write(&canonical_path, text).map_err(|e| ConvertError::Write {
        path: canonical_path.clone(),
        source: e,
    })?;
    info!(
        path = %canonical_path.display(),
        entries = doc.len(),
        "wrote canonical file"
    );
    Ok(canonical_path)
}

/// The editing path for a canonical file: `<source>.yaml`.
#[must_use]
pub fn editing_path_for(source_path: &Path) -> PathBuf {
    let mut name = source_path.as_os_str().to_os_string();
    name.push(".");
    name.push(EDITING_EXTENSION);
    PathBuf::from(name)
}

/// The canonical path for an editing file: the last extension stripped.
#[must_use]
pub fn canonical_path_for(editing_path: &Path) -> PathBuf {
    editing_path.with_extension("")
}

fn map_bodies(doc: &SnippetDocument, f: impl Fn(&Body) -> Body) -> SnippetDocument {
    doc.iter()
        .map(|(name, snippet)| {
            let mut snippet = snippet.clone();
            snippet.body = f(&snippet.body);
            (name.clone(), snippet)
        })
        .collect()
}
