use crate::scanner::FileEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to a relative path to name its diff artifact
pub const DIFF_SUFFIX: &str = ".diff";

/// Location of the diff artifact for `entry` inside `diffs_dir`.
///
/// Intermediate segments of the relative path are kept, so `maps/a.tbl`
/// maps to `<diffs_dir>/maps/a.tbl.diff`.
#[must_use]
pub fn diff_output_path(diffs_dir: &Path, entry: &FileEntry) -> PathBuf {
    diffs_dir.join(format!("{}{DIFF_SUFFIX}", entry.as_str()))
}

/// Ensures parent directories exist for a given path
///
/// # Errors
///
/// Returns an error if the parent directories cannot be created
pub fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create parent directories for {}", path.display())
        })?;
    }
    Ok(())
}

/// Returns the parent directory of `path` when it does not exist as a directory
#[must_use]
pub fn missing_parent(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty() && !parent.is_dir())
}
