//! Content comparison of files present in both trees.
//!
//! Each file is read whole, decoded as UTF-8 and fingerprinted. A pair is
//! *different* iff the fingerprints differ. With the legacy fingerprint a
//! collision makes two different files look identical; this is a known
//! limitation of that algorithm and is not detected.

use crate::config::{CompareConfig, CompareMode, FingerprintKind};
use crate::error::CompareError;
use crate::scanner::FileEntry;
use crate::utils::Fingerprint;
use anyhow::Result;
use std::path::Path;
use tracing::{Level, debug, span, trace};

/// Decoded content of one file in one tree, with its fingerprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    pub content: String,
    pub fingerprint: Fingerprint,
}

impl FileSnapshot {
    #[must_use]
    pub fn new(content: String, kind: FingerprintKind) -> Self {
        let fingerprint = Fingerprint::of(kind, &content);
        Self {
            content,
            fingerprint,
        }
    }

    /// Read and fingerprint the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::FileRead`] if the file cannot be read or is
    /// not valid UTF-8.
    pub fn read(path: &Path, kind: FingerprintKind) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CompareError::FileRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let content = String::from_utf8(bytes).map_err(|e| CompareError::FileRead {
            path: path.to_path_buf(),
            reason: format!("invalid UTF-8: {}", e.utf8_error()),
        })?;

        Ok(Self::new(content, kind))
    }

    /// Whether two snapshots are considered to hold the same content
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

/// Both versions of a file whose fingerprints differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDifference {
    pub path: FileEntry,
    /// Version from tree A
    pub a: FileSnapshot,
    /// Version from tree B
    pub b: FileSnapshot,
}

/// Outcome of comparing every present-in-both path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Differing files, in the order they were compared
    pub differing: Vec<FileDifference>,
    /// Files classified as identical
    pub identical: Vec<FileEntry>,
}

impl ComparisonResult {
    #[must_use]
    pub fn identical_count(&self) -> usize {
        self.identical.len()
    }

    #[must_use]
    pub fn differing_count(&self) -> usize {
        self.differing.len()
    }

    /// Differing paths as strings, in comparison order
    #[must_use]
    pub fn differing_paths(&self) -> Vec<&str> {
        self.differing.iter().map(|d| d.path.as_str()).collect()
    }

    /// Look up the differing pair for `path`
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileDifference> {
        self.differing.iter().find(|d| d.path.as_str() == path)
    }

    fn classify(&mut self, path: FileEntry, a: FileSnapshot, b: FileSnapshot) {
        if a.same_content(&b) {
            trace!(path = %path, fingerprint = %a.fingerprint, "Identical");
            self.identical.push(path);
        } else {
            debug!(path = %path, a = %a.fingerprint, b = %b.fingerprint, "Content differs");
            self.differing.push(FileDifference { path, a, b });
        }
    }
}

/// Compare every path of `present` between `root_a` and `root_b`.
///
/// In [`CompareMode::Batch`] all pairs are loaded before any is classified,
/// so every content stays in memory for the rest of the run. In
/// [`CompareMode::Streaming`] each pair is classified as soon as it is read
/// and identical contents are dropped immediately. Both modes produce the
/// same result.
///
/// # Errors
///
/// Returns [`CompareError::FileRead`] on the first file that cannot be read
/// or decoded; no partial result is returned.
pub fn compare_files(
    present: &[FileEntry],
    root_a: &Path,
    root_b: &Path,
    config: &CompareConfig,
) -> Result<ComparisonResult> {
    let span = span!(
        Level::DEBUG,
        "compare_files",
        files = present.len(),
        mode = ?config.mode,
        fingerprint = ?config.fingerprint
    );
    let _guard = span.enter();

    let read_pair = |entry: &FileEntry| -> Result<(FileSnapshot, FileSnapshot)> {
        let a = FileSnapshot::read(&entry.resolve(root_a), config.fingerprint)?;
        let b = FileSnapshot::read(&entry.resolve(root_b), config.fingerprint)?;
        Ok((a, b))
    };

    let mut result = ComparisonResult::default();

    match config.mode {
        CompareMode::Batch => {
            let loaded = present
                .iter()
                .map(|entry| read_pair(entry).map(|(a, b)| (entry.clone(), a, b)))
                .collect::<Result<Vec<_>>>()?;

            for (path, a, b) in loaded {
                result.classify(path, a, b);
            }
        }
        CompareMode::Streaming => {
            for entry in present {
                let (a, b) = read_pair(entry)?;
                result.classify(entry.clone(), a, b);
            }
        }
    }

    debug!(
        differing = result.differing_count(),
        identical = result.identical_count(),
        "Comparison complete"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn trees(files: &[(&str, &str, &str)]) -> Result<(TempDir, Vec<FileEntry>)> {
        let dir = tempdir()?;
        let mut entries = Vec::new();
        for (path, a, b) in files {
            for (root, content) in [("dirA", a), ("dirB", b)] {
                let full = dir.path().join(root).join(path);
                fs::create_dir_all(full.parent().unwrap())?;
                fs::write(full, content)?;
            }
            entries.push(FileEntry::new(path));
        }
        Ok((dir, entries))
    }

    #[test]
    fn test_classifies_pairs() -> Result<()> {
        let (dir, entries) = trees(&[
            ("a.tbl", "x=1\n", "x=2\n"),
            ("c.ods", "same\n", "same\n"),
            ("sub/d.lua", "print(1)\n", "print(2)\n"),
        ])?;

        let result = compare_files(
            &entries,
            &dir.path().join("dirA"),
            &dir.path().join("dirB"),
            &CompareConfig::default(),
        )?;

        assert_eq!(result.differing_paths(), vec!["a.tbl", "sub/d.lua"]);
        assert_eq!(result.identical_count(), 1);

        let diff = result.get("a.tbl").unwrap();
        assert_eq!(diff.a.content, "x=1\n");
        assert_eq!(diff.b.content, "x=2\n");
        Ok(())
    }

    #[test]
    fn test_batch_and_streaming_agree() -> Result<()> {
        let (dir, entries) = trees(&[
            ("one.lua", "a", "b"),
            ("two.lua", "same", "same"),
            ("three.lua", "", "x"),
        ])?;
        let (root_a, root_b) = (dir.path().join("dirA"), dir.path().join("dirB"));

        for fingerprint in [FingerprintKind::Legacy, FingerprintKind::Xxh3] {
            let batch = compare_files(
                &entries,
                &root_a,
                &root_b,
                &CompareConfig {
                    fingerprint,
                    mode: CompareMode::Batch,
                },
            )?;
            let streaming = compare_files(
                &entries,
                &root_a,
                &root_b,
                &CompareConfig {
                    fingerprint,
                    mode: CompareMode::Streaming,
                },
            )?;
            assert_eq!(batch, streaming);
        }
        Ok(())
    }

    #[test]
    fn test_legacy_collision_reported_identical() -> Result<()> {
        let (dir, entries) = trees(&[("clash.lua", "Aa", "BB")])?;
        let (root_a, root_b) = (dir.path().join("dirA"), dir.path().join("dirB"));

        let legacy = compare_files(
            &entries,
            &root_a,
            &root_b,
            &CompareConfig {
                fingerprint: FingerprintKind::Legacy,
                mode: CompareMode::Batch,
            },
        )?;
        assert_eq!(legacy.identical_count(), 1);

        let xxh3 = compare_files(&entries, &root_a, &root_b, &CompareConfig::default())?;
        assert_eq!(xxh3.differing_paths(), vec!["clash.lua"]);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_file_read_error() -> Result<()> {
        let (dir, entries) = trees(&[("bin.ods", "ok", "ok")])?;
        fs::write(dir.path().join("dirB/bin.ods"), [0xFF, 0xFE, 0x00])?;

        let err = compare_files(
            &entries,
            &dir.path().join("dirA"),
            &dir.path().join("dirB"),
            &CompareConfig::default(),
        )
        .unwrap_err();

        match err.downcast_ref::<CompareError>() {
            Some(CompareError::FileRead { path, reason }) => {
                assert!(path.ends_with("dirB/bin.ods"));
                assert!(reason.starts_with("invalid UTF-8"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_vanished_file_aborts_in_both_modes() -> Result<()> {
        let (dir, entries) = trees(&[("a.lua", "1", "2"), ("gone.lua", "x", "x")])?;
        fs::remove_file(dir.path().join("dirA/gone.lua"))?;

        for mode in [CompareMode::Batch, CompareMode::Streaming] {
            let result = compare_files(
                &entries,
                &dir.path().join("dirA"),
                &dir.path().join("dirB"),
                &CompareConfig {
                    fingerprint: FingerprintKind::Xxh3,
                    mode,
                },
            );
            assert!(matches!(
                result.unwrap_err().downcast_ref::<CompareError>(),
                Some(CompareError::FileRead { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let dir = tempdir()?;
        let result = compare_files(&[], dir.path(), dir.path(), &CompareConfig::default())?;
        assert_eq!(result, ComparisonResult::default());
        Ok(())
    }
}
