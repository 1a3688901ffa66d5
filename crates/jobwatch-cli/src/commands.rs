use crate::args::Cli;
use crate::ingest;
use crate::presentation;
use crate::types::OutputFormat;
use anyhow::Result;
use jobwatch_engine::{generate_report, reconcile};

pub fn run(cli: Cli) -> Result<()> {
    let (events, mut diagnostics) = ingest::read_events(&cli.log_file)?;

    let outcome = reconcile(&events);
    diagnostics.extend(outcome.diagnostics);

    let report = generate_report(&outcome.jobs);

    match cli.format {
        OutputFormat::Plain => presentation::console::render(&report, &diagnostics),
        OutputFormat::Json => presentation::json::render(&report, &diagnostics)?,
    }

    if !cli.no_summary {
        // A failed summary write downgrades to a warning; the console
        // report already went out, so the run still succeeds.
        if let Err(e) = presentation::summary::write(&cli.summary_file, &report) {
            eprintln!("Warning: could not write summary file: {:#}", e);
        }
    }

    Ok(())
}
