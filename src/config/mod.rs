pub mod parser;
pub mod validator;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension markers that gate which differing files receive a diff.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".lua", ".xtbl", ".tbl", ".ods"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub roots: RootsConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub diff: DiffConfig,
}

/// Locations of the two trees and the diff output area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootsConfig {
    #[serde(default = "default_dir_a")]
    pub dir_a: PathBuf,
    #[serde(default = "default_dir_b")]
    pub dir_b: PathBuf,
    #[serde(default = "default_diffs")]
    pub diffs: PathBuf,
}

/// Tree traversal options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// List files reached through symbolic links. A link whose target cannot
    /// be resolved aborts the scan.
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: default_follow_symlinks(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompareConfig {
    #[serde(default)]
    pub fingerprint: FingerprintKind,
    #[serde(default)]
    pub mode: CompareMode,
}

/// Content fingerprint used to decide whether two files differ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintKind {
    /// 31-multiplier rolling hash over UTF-16 code units, wrapped to `i32`.
    /// Kept for compatibility with earlier reports; collisions make distinct
    /// files look identical.
    Legacy,
    /// 128-bit xxHash3 over the UTF-8 bytes
    #[default]
    Xxh3,
}

/// How long file contents stay resident during comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// Load every pair before classifying; all contents live until the run ends
    #[default]
    Batch,
    /// Classify each pair as it is read and drop identical contents immediately
    Streaming,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub algorithm: DiffAlgorithm,
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    #[serde(default)]
    pub create_parent_dirs: bool,
}

/// How extension markers are matched against a relative path
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Marker may appear anywhere in the path, including directory names
    #[default]
    Substring,
    /// Path must end with the marker
    Suffix,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            dir_a: default_dir_a(),
            dir_b: default_dir_b(),
            diffs: default_diffs(),
        }
    }
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            match_mode: MatchMode::default(),
            algorithm: DiffAlgorithm::default(),
            context_lines: default_context_lines(),
            create_parent_dirs: false,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Unlike the compiled-in defaults, an explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid TOML
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        parser::parse_config_file(path)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

fn default_dir_a() -> PathBuf {
    PathBuf::from(crate::DEFAULT_DIR_A)
}

fn default_dir_b() -> PathBuf {
    PathBuf::from(crate::DEFAULT_DIR_B)
}

fn default_diffs() -> PathBuf {
    PathBuf::from(crate::DEFAULT_DIFFS_DIR)
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

const fn default_follow_symlinks() -> bool {
    true
}

const fn default_context_lines() -> usize {
    3
}
