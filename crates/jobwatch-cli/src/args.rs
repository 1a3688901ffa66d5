use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(about = "Reconstruct batch-job lifespans from a log file and report their health", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Comma-delimited log file to analyze
    #[arg(default_value = "logs.log")]
    pub log_file: PathBuf,

    /// Output format for the report
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    /// Where to persist the summary counts
    #[arg(long, default_value = "monitoring_report.txt")]
    pub summary_file: PathBuf,

    /// Skip writing the summary file
    #[arg(long)]
    pub no_summary: bool,
}
