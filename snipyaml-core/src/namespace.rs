//! Snippet namespaces: the independent scopes snippet files live in.
//!
//! Two scopes exist: per-language personal snippets (`<language>.json` in
//! the user snippets directory) and per-project multi-language snippets
//! (`<name>.code-snippets`). Both produce editing files ending in `.yaml`,
//! so a bare suffix check is ambiguous; every operation that needs to decide
//! whether a path belongs to a scope is parameterized by a `Namespace`
//! carrying the scope's directory and canonical extension.

use std::path::{Path, PathBuf};

/// Fixed extension appended to a canonical path to form its editing sibling
pub const EDITING_EXTENSION: &str = "yaml";

/// Canonical extension of per-language user snippet files
pub const USER_SNIPPET_EXTENSION: &str = "json";

/// Canonical extension of per-project multi-language snippet files
pub const PROJECT_SNIPPET_EXTENSION: &str = "code-snippets";

/// One snippet scope: where its canonical files live and which extension
/// they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    directory: PathBuf,
    canonical_extension: &'static str,
}

impl Namespace {
    /// The per-language personal snippets scope rooted at `directory`
    #[must_use]
    pub fn user_snippets(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            canonical_extension: USER_SNIPPET_EXTENSION,
        }
    }

    /// The per-project multi-language snippets scope rooted at `directory`
    #[must_use]
    pub fn project_snippets(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            canonical_extension: PROJECT_SNIPPET_EXTENSION,
        }
    }

    /// The directory canonical files of this scope live in
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The canonical file extension of this scope, without the dot
    #[must_use]
    pub fn canonical_extension(&self) -> &'static str {
        self.canonical_extension
    }

    /// The canonical path for a file stem: `<directory>/<stem>.<extension>`
    #[must_use]
    pub fn canonical_path(&self, stem: &str) -> PathBuf {
        self.directory
            .join(format!("{stem}.{}", self.canonical_extension))
    }

    /// True iff `path` names an editing file this scope manages: its parent
    /// directory equals the scope directory and its file name ends with
    /// `.<canonical_extension>.yaml`.
    ///
    /// The directory comparison is ASCII case-insensitive because host
    /// filesystems may be case-insensitive. A `.json.yaml` file never
    /// matches the project scope and a `.code-snippets.yaml` file never
    /// matches the user scope.
    #[must_use]
    pub fn is_editing_artifact(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        if !paths_eq_ignore_case(parent, &self.directory) {
            return false;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let suffix = format!(".{}.{EDITING_EXTENSION}", self.canonical_extension);
        name.to_ascii_lowercase().ends_with(&suffix)
    }
}

/// Component-wise ASCII case-insensitive path comparison
fn paths_eq_ignore_case(a: &Path, b: &Path) -> bool {
    let mut a = a.components();
    let mut b = b.components();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                let x = x.as_os_str().to_string_lossy();
                let y = y.as_os_str().to_string_lossy();
                if !x.eq_ignore_ascii_case(&y) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
