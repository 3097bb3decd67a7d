#![warn(missing_docs)]

//! # treediff - Directory Tree Comparison
//!
//! treediff compares two directory trees, A and B. It reports files of A
//! that are missing from B, finds files whose content differs, and writes a
//! unified diff for each differing file whose path matches an extension
//! allow-list.
//!
//! ## Pipeline
//!
//! Each stage is a plain function over the previous stage's output:
//!
//! - [`scanner`]: recursive listing of regular files under a root
//! - [`reconcile`]: split A's files into present-in-B and missing-from-B
//! - [`compare`]: read, fingerprint and classify present-in-both files
//! - [`diff`]: write `<path>.diff` artifacts for allow-listed differing files
//! - [`output`]: end-of-run summary and console styling
//!
//! [`pipeline`] runs them in order; [`config`] holds the compiled-in
//! defaults and optional TOML overrides.
//!
//! ## Example Usage
//!
//! ```no_run
//! use treediff::{config::Config, output, pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! // dirA, dirB and diffs relative to the working directory
//! let config = Config::default();
//! let report = pipeline::run(&config)?;
//! output::print_summary(&report.summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitation
//!
//! With [`config::FingerprintKind::Legacy`] two different files whose
//! 32-bit fingerprints collide are reported as identical.

/// Command-line interface definitions (argument parsing structures).
#[allow(missing_docs)]
pub mod cli;

/// Content comparison of files present in both trees.
#[allow(missing_docs)]
pub mod compare;

/// Configuration parsing, validation, and defaults.
#[allow(missing_docs)]
pub mod config;

/// Unified diff generation and diff artifact output.
#[allow(missing_docs)]
pub mod diff;

/// Error taxonomy for aborted runs.
pub mod error;

/// Tracing subscriber setup.
pub mod logging;

/// Output formatting and the run summary.
#[allow(missing_docs)]
pub mod output;

/// Stage machine running the full comparison.
#[allow(missing_docs)]
pub mod pipeline;

/// Name reconciliation between the two trees.
pub mod reconcile;

/// Filesystem scanning and directory traversal.
#[allow(missing_docs)]
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

pub use error::CompareError;

/// Current version of the treediff binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default root of tree A, relative to the working directory.
pub const DEFAULT_DIR_A: &str = "dirA";

/// Default root of tree B, relative to the working directory.
pub const DEFAULT_DIR_B: &str = "dirB";

/// Default diff output directory, relative to the working directory.
pub const DEFAULT_DIFFS_DIR: &str = "diffs";
