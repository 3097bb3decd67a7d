/// File entries and the per-root directory index.
pub mod index;

/// Recursive traversal producing a [`DirectoryIndex`].
pub mod walk;

pub use index::{DirectoryIndex, FileEntry};
pub use walk::index_tree;
