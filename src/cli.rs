//! Command-line interface definitions for treediff.
//!
//! The CLI definitions are shared between the main binary and build tools
//! (like xtask) for man page generation.

use crate::config::{CompareMode, Config, FingerprintKind};
use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for treediff.
#[derive(Parser, Debug)]
#[command(
    name = "treediff",
    version = crate::VERSION,
    about = "Compare two directory trees and write diffs for changed files",
    long_about = "Lists files of tree A missing from tree B, finds files whose content differs, \
                  and writes a unified diff for each differing file whose path matches the \
                  extension allow-list"
)]
pub struct Cli {
    /// Root of tree A
    #[arg(long, value_name = "PATH")]
    pub dir_a: Option<PathBuf>,

    /// Root of tree B
    #[arg(long, value_name = "PATH")]
    pub dir_b: Option<PathBuf>,

    /// Existing directory that receives the .diff files
    #[arg(long, value_name = "PATH")]
    pub diffs: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "TREEDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the legacy 32-bit rolling fingerprint instead of xxHash3
    #[arg(long)]
    pub legacy_fingerprint: bool,

    /// Release identical file contents as soon as they are compared
    #[arg(long)]
    pub streaming: bool,

    /// Create missing directories under the diffs directory for nested paths
    #[arg(long)]
    pub create_parent_dirs: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Build the run configuration: compiled-in defaults, then the config
    /// file if one was given, then command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dir_a) = &self.dir_a {
            config.roots.dir_a.clone_from(dir_a);
        }
        if let Some(dir_b) = &self.dir_b {
            config.roots.dir_b.clone_from(dir_b);
        }
        if let Some(diffs) = &self.diffs {
            config.roots.diffs.clone_from(diffs);
        }
        if self.legacy_fingerprint {
            config.compare.fingerprint = FingerprintKind::Legacy;
        }
        if self.streaming {
            config.compare.mode = CompareMode::Streaming;
        }
        if self.create_parent_dirs {
            config.diff.create_parent_dirs = true;
        }

        Ok(config)
    }
}
