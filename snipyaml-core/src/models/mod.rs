//! Data model for snippet documents

mod snippet;

pub use snippet::{default_document, Body, Snippet, SnippetDocument};
