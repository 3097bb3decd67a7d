use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;
use std::process;
use treediff::cli::Cli;
use treediff::output::{self, Verbosity};
use treediff::{logging, pipeline};

fn main() {
    if let Err(e) = run() {
        output::error(&format!("Error: {e:#}"));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    output::set_verbosity(verbosity);
    logging::init(verbosity);

    let config = cli.resolve_config()?;
    output::info(&format!(
        "Comparing {} against {}",
        config.roots.dir_a.display(),
        config.roots.dir_b.display()
    ));

    output::verbose(&format!(
        "Fingerprint: {:?}, mode: {:?}, diffs: {}",
        config.compare.fingerprint,
        config.compare.mode,
        config.roots.diffs.display()
    ));

    let report = pipeline::run(&config)?;

    if !report.artifacts.is_empty() {
        output::success(&format!(
            "Wrote {} diff file(s) to {}",
            report.artifacts.len(),
            config.roots.diffs.display()
        ));
    }
    output::print_summary(&report.summary);

    Ok(())
}
