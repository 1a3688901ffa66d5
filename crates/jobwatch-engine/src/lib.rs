// Engine module - core reconciliation and classification logic
// This layer sits between tokenized events (types) and CLI presentation

mod reconcile;
mod report;

pub use reconcile::{ReconcileOutcome, reconcile};
pub use report::{
    ERROR_THRESHOLD_SECS, JobStatus, Report, ReportLine, WARNING_THRESHOLD_SECS, format_duration,
    generate_report,
};
