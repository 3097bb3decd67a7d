//! The comparison run as a linear stage machine.
//!
//! `Indexing → Reconciling → Comparing → Diffing → Summarizing → Done`.
//! The first error moves the run to `Failed` and is returned with the failing
//! stage attached as context; nothing is retried or resumed.

use crate::compare::{ComparisonResult, compare_files};
use crate::config::Config;
use crate::diff::{DiffArtifact, write_diff_artifacts};
use crate::output::Summary;
use crate::reconcile::{ReconciliationResult, reconcile};
use crate::scanner::index_tree;
use anyhow::{Context, Result};
use std::fmt;
use tracing::{error, info};

/// Stage of a comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Indexing,
    Reconciling,
    Comparing,
    Diffing,
    Summarizing,
    Done,
    Failed,
}

impl Stage {
    /// Stage that follows this one on success
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Indexing => Self::Reconciling,
            Self::Reconciling => Self::Comparing,
            Self::Comparing => Self::Diffing,
            Self::Diffing => Self::Summarizing,
            Self::Summarizing | Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Indexing => "indexing",
            Self::Reconciling => "reconciling",
            Self::Comparing => "comparing",
            Self::Diffing => "diffing",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub files_in_a: usize,
    pub files_in_b: usize,
    pub reconciliation: ReconciliationResult,
    pub comparison: ComparisonResult,
    pub artifacts: Vec<DiffArtifact>,
    pub summary: Summary,
}

/// Drives one run through its stages
pub struct Pipeline<'a> {
    config: &'a Config,
    stage: Stage,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self {
            config,
            stage: Stage::Indexing,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Execute every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage error, with the stage named in its context.
    pub fn run(&mut self) -> Result<RunReport> {
        match self.execute() {
            Ok(report) => Ok(report),
            Err(e) => {
                let message = format!("{e:#}");
                error!(stage = %self.stage, error = %message, "Run failed");
                let failed_at = self.stage;
                self.stage = Stage::Failed;
                Err(e.context(format!("Comparison failed while {failed_at}")))
            }
        }
    }

    fn execute(&mut self) -> Result<RunReport> {
        let config = self.config;
        let roots = &config.roots;

        self.enter(Stage::Indexing);
        let index_a = index_tree(&roots.dir_a, &config.scan)
            .with_context(|| format!("Failed to index {}", roots.dir_a.display()))?;
        let index_b = index_tree(&roots.dir_b, &config.scan)
            .with_context(|| format!("Failed to index {}", roots.dir_b.display()))?;
        info!(a = index_a.len(), b = index_b.len(), "Indexed both trees");

        self.advance();
        let reconciliation = reconcile(&index_a, &index_b);

        self.advance();
        let comparison = compare_files(
            &reconciliation.present_in_both,
            index_a.root(),
            index_b.root(),
            &config.compare,
        )?;

        self.advance();
        let artifacts = write_diff_artifacts(&comparison, &config.diff, &roots.diffs)?;

        self.advance();
        let summary = Summary::from_results(&reconciliation, &comparison);
        info!(
            differing = summary.differing_count(),
            missing = summary.missing_count(),
            identical = comparison.identical_count(),
            diffs = artifacts.len(),
            "Run complete"
        );

        self.advance();

        Ok(RunReport {
            files_in_a: index_a.len(),
            files_in_b: index_b.len(),
            reconciliation,
            comparison,
            artifacts,
            summary,
        })
    }

    fn enter(&mut self, stage: Stage) {
        self.stage = stage;
        info!(stage = %stage, "Entering stage");
    }

    fn advance(&mut self) {
        self.enter(self.stage.next());
    }
}

/// Run the whole comparison described by `config`
///
/// # Errors
///
/// Returns the first error raised by any stage.
pub fn run(config: &Config) -> Result<RunReport> {
    Pipeline::new(config).run()
}
