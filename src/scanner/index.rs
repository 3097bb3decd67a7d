use std::fmt;
use std::path::{Path, PathBuf};

/// A regular file beneath a root, identified by its `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileEntry(String);

impl FileEntry {
    /// Create an entry from an already relative path string.
    ///
    /// Backslashes are rewritten to `/` so paths from any platform join on
    /// the same key.
    #[must_use]
    pub fn new(relative: &str) -> Self {
        Self(relative.replace('\\', "/"))
    }

    /// Build an entry from a path below `root`.
    ///
    /// Returns `None` when `path` is not beneath `root` or is the root itself.
    #[must_use]
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();

        if segments.is_empty() {
            return None;
        }

        Some(Self(segments.join("/")))
    }

    /// The relative path string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve this entry against a root directory
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered listing of every regular file under one root.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    root: PathBuf,
    entries: Vec<FileEntry>,
}

impl DirectoryIndex {
    /// Create an index from entries in traversal order
    #[must_use]
    pub const fn new(root: PathBuf, entries: Vec<FileEntry>) -> Self {
        Self { root, entries }
    }

    /// Root directory the entries are relative to
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Relative path strings in traversal order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FileEntry::as_str)
    }

    /// Exact string membership test (linear)
    #[must_use]
    pub fn contains(&self, relative: &str) -> bool {
        self.paths().any(|p| p == relative)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
