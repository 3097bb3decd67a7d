use crate::compare::ComparisonResult;
use crate::reconcile::ReconciliationResult;
use colored::Colorize;
use std::fmt;

/// Final report of a comparison run.
///
/// Identical files are counted elsewhere and are not listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub missing_in_b: Vec<String>,
    pub differing: Vec<String>,
}

impl Summary {
    #[must_use]
    pub fn from_results(reconciliation: &ReconciliationResult, comparison: &ComparisonResult) -> Self {
        Self {
            missing_in_b: reconciliation
                .missing_paths()
                .into_iter()
                .map(str::to_string)
                .collect(),
            differing: comparison
                .differing_paths()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn differing_count(&self) -> usize {
        self.differing.len()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing_in_b.len()
    }

    /// Colored rendering for a terminal
    #[must_use]
    pub fn to_colored_string(&self) -> String {
        format!(
            "{} {} different files were found, and {} files were not found in directory B\n\
             {} {}\n\
             {} {}",
            "Done!".green().bold(),
            self.differing_count().to_string().yellow().bold(),
            self.missing_count().to_string().red().bold(),
            "Files not found in directory B:".dimmed(),
            self.missing_in_b.join(","),
            "Different files in directory B:".dimmed(),
            self.differing.join(","),
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Done! {} different files were found, and {} files were not found in directory B",
            self.differing_count(),
            self.missing_count()
        )?;
        writeln!(f, "Files not found in directory B: {}", self.missing_in_b.join(","))?;
        write!(f, "Different files in directory B: {}", self.differing.join(","))
    }
}
