//! Diff artifacts for differing files.
//!
//! This module provides:
//! - Unified diff rendering ([`unified`])
//! - Extension allow-list matching ([`ExtensionFilter`])
//! - Writing one `<path>.diff` per qualifying differing file

/// Unified diff generation for text files
pub mod unified;

pub use unified::{UnifiedDiffConfig, generate_unified_diff, unified_diff_string};

use crate::compare::{ComparisonResult, FileDifference};
use crate::config::{DiffAlgorithm, DiffConfig, MatchMode};
use crate::error::CompareError;
use crate::scanner::FileEntry;
use crate::utils::paths::{diff_output_path, ensure_parent_dirs, missing_parent};
use anyhow::Result;
use similar::Algorithm;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info, span, trace};

/// Label suffix for the tree A side of a diff
pub const LABEL_A: &str = ".dirA";
/// Label suffix for the tree B side of a diff
pub const LABEL_B: &str = ".dirB";

/// Convert `DiffAlgorithm` config enum to `similar::Algorithm`
#[must_use]
pub const fn config_to_algorithm(algo: DiffAlgorithm) -> Algorithm {
    match algo {
        DiffAlgorithm::Myers => Algorithm::Myers,
        DiffAlgorithm::Patience => Algorithm::Patience,
    }
}

/// Decides which differing paths receive a diff artifact
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    markers: Vec<String>,
    mode: MatchMode,
}

impl ExtensionFilter {
    #[must_use]
    pub const fn new(markers: Vec<String>, mode: MatchMode) -> Self {
        Self { markers, mode }
    }

    #[must_use]
    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(config.extensions.clone(), config.match_mode)
    }

    /// Whether `path` matches any marker.
    ///
    /// In [`MatchMode::Substring`] a marker inside a directory name counts
    /// (`data.tbl/readme` matches `.tbl`); [`MatchMode::Suffix`] only accepts
    /// paths ending with a marker.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.markers.iter().any(|marker| match self.mode {
            MatchMode::Substring => path.contains(marker.as_str()),
            MatchMode::Suffix => path.ends_with(marker.as_str()),
        })
    }
}

/// A diff written for one differing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffArtifact {
    pub path: FileEntry,
    /// File the patch was written to
    pub output: PathBuf,
    pub patch: String,
}

/// Render the patch for one differing file, labelled `<path>.dirA` / `<path>.dirB`
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn render_patch(difference: &FileDifference, config: &UnifiedDiffConfig) -> Result<String> {
    let path = difference.path.as_str();
    unified_diff_string(
        &difference.a.content,
        &difference.b.content,
        &format!("{path}{LABEL_A}"),
        &format!("{path}{LABEL_B}"),
        config,
    )
}

/// Write a `<path>.diff` file into `diffs_dir` for every differing file the
/// allow-list accepts. Other differing files are skipped without output.
///
/// `diffs_dir` must already exist once there is anything to write. A nested
/// path whose parent directory is missing under `diffs_dir` fails unless
/// `create_parent_dirs` is set.
///
/// # Errors
///
/// Returns [`CompareError::OutputWrite`] if `diffs_dir` is missing, a parent
/// directory is missing, or a write fails. Artifacts written before the
/// failure stay on disk; the remaining ones are not written.
pub fn write_diff_artifacts(
    comparison: &ComparisonResult,
    config: &DiffConfig,
    diffs_dir: &Path,
) -> Result<Vec<DiffArtifact>> {
    let span = span!(Level::DEBUG, "write_diffs", dir = %diffs_dir.display());
    let _guard = span.enter();

    let filter = ExtensionFilter::from_config(config);
    let qualifying: Vec<&FileDifference> = comparison
        .differing
        .iter()
        .filter(|difference| {
            let matched = filter.matches(difference.path.as_str());
            if !matched {
                trace!(path = %difference.path, "No matching extension, skipping diff");
            }
            matched
        })
        .collect();

    if !qualifying.is_empty() && !diffs_dir.is_dir() {
        return Err(CompareError::OutputWrite {
            path: diffs_dir.to_path_buf(),
            reason: "output directory does not exist".to_string(),
        }
        .into());
    }

    let render_config = UnifiedDiffConfig {
        context_lines: config.context_lines,
        algorithm: config_to_algorithm(config.algorithm),
    };

    let mut artifacts = Vec::new();

    for difference in qualifying {
        let output = diff_output_path(diffs_dir, &difference.path);
        prepare_parent(&output, config.create_parent_dirs)?;

        let patch = render_patch(difference, &render_config)?;
        std::fs::write(&output, &patch).map_err(|e| CompareError::OutputWrite {
            path: output.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %difference.path, output = %output.display(), "Wrote diff");

        artifacts.push(DiffArtifact {
            path: difference.path.clone(),
            output,
            patch,
        });
    }

    info!(written = artifacts.len(), "Diff artifacts written");

    Ok(artifacts)
}

fn prepare_parent(output: &Path, create: bool) -> Result<()> {
    let Some(parent) = missing_parent(output) else {
        return Ok(());
    };

    if create {
        return ensure_parent_dirs(output).map_err(|e| {
            CompareError::OutputWrite {
                path: parent.to_path_buf(),
                reason: format!("{e:#}"),
            }
            .into()
        });
    }

    Err(CompareError::OutputWrite {
        path: output.to_path_buf(),
        reason: format!(
            "parent directory {} does not exist (set diff.create_parent_dirs to create it)",
            parent.display()
        ),
    }
    .into())
}
