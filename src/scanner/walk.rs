use super::{DirectoryIndex, FileEntry};
use crate::config::ScanConfig;
use crate::error::CompareError;
use anyhow::Result;
use std::path::Path;
use tracing::{Level, debug, span, trace};
use walkdir::WalkDir;

/// Recursively list every regular file under `root`.
///
/// Directories are descended into but never listed. Siblings are visited in
/// file-name order, so the result is deterministic for a fixed filesystem
/// state. Symbolic links are resolved and listed under their own name when
/// `follow_symlinks` is set (the default); otherwise they are skipped.
///
/// # Errors
///
/// - [`CompareError::PathNotFound`] if `root` does not exist
/// - [`CompareError::NotReadable`] if `root` is not a directory, any
///   directory below it cannot be listed, or a followed link is dangling
pub fn index_tree(root: &Path, config: &ScanConfig) -> Result<DirectoryIndex> {
    let span = span!(Level::DEBUG, "index_tree", root = %root.display());
    let _guard = span.enter();

    if !root.exists() {
        return Err(CompareError::PathNotFound(root.to_path_buf()).into());
    }
    if !root.is_dir() {
        return Err(CompareError::NotReadable {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        }
        .into());
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CompareError::NotReadable {
            path: e.path().unwrap_or(root).to_path_buf(),
            reason: e.to_string(),
        })?;

        if entry.path_is_symlink() && !config.follow_symlinks {
            debug!(path = %entry.path().display(), "Skipping symbolic link");
            continue;
        }

        if !entry.file_type().is_file() {
            trace!(path = %entry.path().display(), "Skipping non-file entry");
            continue;
        }

        if let Some(file) = FileEntry::from_path(root, entry.path()) {
            entries.push(file);
        }
    }

    debug!(files = entries.len(), "Indexed tree");

    Ok(DirectoryIndex::new(root.to_path_buf(), entries))
}
