use anyhow::Result;
use similar::{Algorithm, ChangeTag, TextDiff};
use std::io::Write;
use tracing::{Level, debug, span};

/// Separator written above the file headers of every patch
const SEPARATOR: &str =
    "===================================================================";

/// Marker emitted after a line that lacks a trailing newline
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Configuration for unified diff generation
#[derive(Debug, Clone, Copy)]
pub struct UnifiedDiffConfig {
    /// Number of context lines around changes (typically 3)
    pub context_lines: usize,
    /// Diff algorithm to use (Myers, Patience)
    pub algorithm: Algorithm,
}

impl Default for UnifiedDiffConfig {
    fn default() -> Self {
        Self {
            context_lines: 3,
            algorithm: Algorithm::Myers,
        }
    }
}

/// Generate a unified diff between two file contents.
///
/// Output layout:
/// - A `=` separator line
/// - File headers (`--- <old_label>` and `+++ <new_label>`), labels written verbatim
/// - Hunk headers (`@@ -10,7 +10,9 @@`)
/// - Context lines (prefixed with space), deletions (`-`), additions (`+`)
/// - `\ No newline at end of file` after a final line without newline
///
/// Returns the number of changed lines written.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn generate_unified_diff(
    old_content: &str,
    new_content: &str,
    old_label: &str,
    new_label: &str,
    config: &UnifiedDiffConfig,
    writer: &mut dyn Write,
) -> Result<usize> {
    let span = span!(
        Level::DEBUG,
        "diff_generation",
        path = new_label,
        algorithm = ?config.algorithm,
        context = config.context_lines
    );
    let _guard = span.enter();

    let diff = TextDiff::configure()
        .algorithm(config.algorithm)
        .diff_lines(old_content, new_content);

    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer, "--- {old_label}")?;
    writeln!(writer, "+++ {new_label}")?;

    let mut total_changes = 0;

    for hunk in diff
        .unified_diff()
        .context_radius(config.context_lines)
        .iter_hunks()
    {
        writeln!(writer, "{}", hunk.header())?;

        for change in hunk.iter_changes() {
            let prefix = match change.tag() {
                ChangeTag::Delete => {
                    total_changes += 1;
                    '-'
                }
                ChangeTag::Insert => {
                    total_changes += 1;
                    '+'
                }
                ChangeTag::Equal => ' ',
            };

            write!(writer, "{prefix}{}", change.value())?;

            if change.missing_newline() {
                writeln!(writer)?;
                writeln!(writer, "{NO_NEWLINE_MARKER}")?;
            }
        }
    }

    debug!(changes = total_changes, "Diff generation complete");

    Ok(total_changes)
}

/// Render a unified diff into a `String`
///
/// # Errors
///
/// Returns an error if the rendered diff is not valid UTF-8, which cannot
/// happen for `&str` inputs.
pub fn unified_diff_string(
    old_content: &str,
    new_content: &str,
    old_label: &str,
    new_label: &str,
    config: &UnifiedDiffConfig,
) -> Result<String> {
    let mut output = Vec::new();
    generate_unified_diff(old_content, new_content, old_label, new_label, config, &mut output)?;
    Ok(String::from_utf8(output)?)
}
