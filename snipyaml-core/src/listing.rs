//! Discovery and ordering of snippet targets a user can choose to edit.
//!
//! Host-driven state (the languages the host knows about and the language of
//! the active document) is passed in as a read-only [`HostContext`] at call
//! time, so the ordering logic stays pure and testable. Only
//! [`existing_snippet_stems`] touches the filesystem.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::namespace::Namespace;

/// Read-only host state used to order and label targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Language identifiers known to the host
    pub languages: Vec<String>,
    /// Language of the currently focused document, if any
    pub active_language: Option<String>,
}

/// How a target relates to the user's current situation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Language of the active document
    Active,
    /// A canonical file already exists for this language
    Existing,
    /// No canonical file yet; editing starts from the built-in template
    New,
}

/// One choosable snippet file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTarget {
    /// Language identifier (the canonical file stem)
    pub language: String,
    /// Canonical file path for this target
    pub path: PathBuf,
    /// Whether the canonical file exists on disk
    pub exists: bool,
    /// Ordering/labeling category
    pub kind: TargetKind,
}

/// Stems of canonical files already present in the namespace directory.
///
/// Files with other extensions are ignored. An unreadable or missing
/// directory yields an empty list; the host decides what to offer in that
/// case, so this is not an error.
#[must_use]
pub fn existing_snippet_stems(namespace: &Namespace) -> Vec<String> {
    let entries = match fs::read_dir(namespace.directory()) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(
                directory = %namespace.directory().display(),
                error = %e,
                "snippet directory not readable"
            );
            return Vec::new();
        }
    };

    let suffix = format!(".{}", namespace.canonical_extension());
    let mut stems = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(stem) = name.strip_suffix(&suffix) {
            if !stem.is_empty() {
                stems.push(stem.to_string());
            }
        }
    }
    stems.sort();
    stems
}

/// Orders the candidate targets for a picker: the active language first,
/// then languages with an existing canonical file, then the remaining known
/// languages. Each language appears at most once.
#[must_use]
pub fn list_targets(
    namespace: &Namespace,
    ctx: &HostContext,
    existing: &[String],
) -> Vec<SnippetTarget> {
    let mut targets: Vec<SnippetTarget> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    if let Some(active) = &ctx.active_language {
        targets.push(SnippetTarget {
            language: active.clone(),
            path: namespace.canonical_path(active),
            exists: existing.iter().any(|s| s == active),
            kind: TargetKind::Active,
        });
        seen.push(active);
    }

    for stem in existing {
        if seen.contains(&stem.as_str()) {
            continue;
        }
        targets.push(SnippetTarget {
            language: stem.clone(),
            path: namespace.canonical_path(stem),
            exists: true,
            kind: TargetKind::Existing,
        });
        seen.push(stem);
    }

    for language in &ctx.languages {
        if seen.contains(&language.as_str()) {
            continue;
        }
        targets.push(SnippetTarget {
            language: language.clone(),
            path: namespace.canonical_path(language),
            exists: false,
            kind: TargetKind::New,
        });
        seen.push(language);
    }

    targets
}
