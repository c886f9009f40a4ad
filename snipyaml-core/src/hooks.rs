//! Host-triggered lifecycle reactions for editing files.
//!
//! The host drives the editing session: it calls [`on_editing_saved`] for
//! every document-saved notification and [`on_editing_closed`] when a
//! document is closed. Both ignore paths that are not editing artifacts of
//! the given namespace, so they can be wired directly to generic host
//! notifications. Events arrive serially and each call runs to completion;
//! no state is kept between calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::convert;
use crate::error::ConvertResult;
use crate::namespace::Namespace;

/// Reacts to a document-saved notification.
///
/// Returns `Ok(None)` when `path` is not an editing artifact of `namespace`;
/// otherwise writes the canonical sibling and returns its path.
///
/// # Errors
///
/// Propagates conversion failures; the editing file is never touched.
pub fn on_editing_saved(path: &Path, namespace: &Namespace) -> ConvertResult<Option<PathBuf>> {
    if !namespace.is_editing_artifact(path) {
        return Ok(None);
    }
    convert::to_canonical_format(path).map(Some)
}

/// Reacts to a document-closed notification.
///
/// Writes the canonical sibling, then removes the editing file. Removal is
/// best-effort: a failed delete is logged and the call still succeeds.
///
/// # Errors
///
/// Propagates conversion failures. When the editing document does not
/// parse, the editing file is left in place so the user's edits survive.
pub fn on_editing_closed(path: &Path, namespace: &Namespace) -> ConvertResult<Option<PathBuf>> {
    if !namespace.is_editing_artifact(path) {
        return Ok(None);
    }
    let canonical = convert::to_canonical_format(path)?;
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "failed to remove editing file");
    }
    Ok(Some(canonical))
}
