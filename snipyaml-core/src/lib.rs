//! snipyaml core library
//!
//! This crate converts code-snippet definition files between their canonical
//! on-disk format (comment-tolerant JSON whose bodies may be line sequences)
//! and a transient YAML editing representation whose bodies are single
//! strings, plus the naming convention, namespace handling and lifecycle
//! reactions the host needs to drive an editing session.
//!
//! Known limitation: comments in a canonical file are accepted on input but
//! are not part of the data model, so a round-trip through the editing
//! format rewrites the canonical file without them.

pub mod config;
pub mod convert;
pub mod error;
pub mod hooks;
pub mod listing;
pub mod models;
pub mod namespace;

pub use config::{default_snippets_dir, Settings};
pub use convert::{
    canonical_path_for, editing_path_for, parse_canonical, parse_editing, render_canonical,
    render_editing, strip_jsonc, to_canonical_format, to_editing_format,
};
pub use error::{
    ConfigError, ConfigResult, ConvertError, ConvertResult, Result, SnipYamlError,
};
pub use hooks::{on_editing_closed, on_editing_saved};
pub use listing::{existing_snippet_stems, list_targets, HostContext, SnippetTarget, TargetKind};
pub use models::{default_document, Body, Snippet, SnippetDocument};
pub use namespace::{
    Namespace, EDITING_EXTENSION, PROJECT_SNIPPET_EXTENSION, USER_SNIPPET_EXTENSION,
};
