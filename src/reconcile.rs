use crate::scanner::{DirectoryIndex, FileEntry};
use std::collections::HashSet;
use tracing::debug;

/// Partition of tree A's files by presence in tree B.
///
/// Both lists keep A's traversal order. Files that exist only in B are not
/// part of the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Paths in A that have no file at the same relative path in B
    pub missing_in_b: Vec<FileEntry>,
    /// Paths in A that also exist in B
    pub present_in_both: Vec<FileEntry>,
}

impl ReconciliationResult {
    /// Missing paths as strings, in A's order
    #[must_use]
    pub fn missing_paths(&self) -> Vec<&str> {
        self.missing_in_b.iter().map(FileEntry::as_str).collect()
    }
}

/// Split A's listing into files present in B and files missing from B.
///
/// Membership is exact string equality of the relative path: no case folding
/// and no trailing-separator handling.
#[must_use]
pub fn reconcile(a: &DirectoryIndex, b: &DirectoryIndex) -> ReconciliationResult {
    let in_b: HashSet<&str> = b.paths().collect();

    let (present_in_both, missing_in_b): (Vec<_>, Vec<_>) = a
        .iter()
        .cloned()
        .partition(|entry| in_b.contains(entry.as_str()));

    debug!(
        present = present_in_both.len(),
        missing = missing_in_b.len(),
        "Reconciled file names"
    );

    ReconciliationResult {
        missing_in_b,
        present_in_both,
    }
}
