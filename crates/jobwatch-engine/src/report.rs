use chrono::{Duration, NaiveTime};
use jobwatch_types::{Job, JobMap};
use serde::Serialize;
use std::fmt;

/// Strict lower bound for the WARNING classification, in seconds.
pub const WARNING_THRESHOLD_SECS: i64 = 5 * 60;
/// Strict lower bound for the ERROR classification, in seconds.
pub const ERROR_THRESHOLD_SECS: i64 = 10 * 60;

/// Health classification of a reconstructed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Running,
    Ok,
    Warning,
    Error,
}

impl JobStatus {
    /// Classify a job duration against the fixed thresholds.
    ///
    /// Both thresholds are strict lower bounds: exactly five minutes is
    /// still Ok, exactly ten minutes is still Warning. A job with no known
    /// duration is Running regardless of elapsed time.
    pub fn classify(duration: Option<Duration>) -> Self {
        match duration {
            None => JobStatus::Running,
            Some(d) if d.num_seconds() > ERROR_THRESHOLD_SECS => JobStatus::Error,
            Some(d) if d.num_seconds() > WARNING_THRESHOLD_SECS => JobStatus::Warning,
            Some(_) => JobStatus::Ok,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Running => write!(f, "RUNNING"),
            JobStatus::Ok => write!(f, "OK"),
            JobStatus::Warning => write!(f, "WARNING"),
            JobStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// One classified job in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub status: JobStatus,
    pub name: String,
    pub pid: u32,
    pub start_time: NaiveTime,
    pub duration_secs: Option<i64>,
    pub duration_display: Option<String>,
}

/// Structured health report: classified job lines plus aggregate counts.
/// Rendering to console text or a summary file is the caller's concern.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    /// Jobs with an observed end, whatever their classification.
    pub completed: usize,
    pub running: usize,
    pub warnings: usize,
    pub errors: usize,
}

/// Classify every job and assemble the display-ordered report.
///
/// Jobs sort by start time ascending, ties broken by name then pid, so
/// repeated generation over the same map yields identical output.
pub fn generate_report(jobs: &JobMap) -> Report {
    let mut sorted: Vec<&Job> = jobs.values().collect();
    sorted.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.pid.cmp(&b.pid))
    });

    let mut report = Report {
        lines: Vec::with_capacity(sorted.len()),
        completed: 0,
        running: 0,
        warnings: 0,
        errors: 0,
    };

    for job in sorted {
        let duration = job.duration();
        let status = JobStatus::classify(duration);

        match status {
            JobStatus::Running => report.running += 1,
            JobStatus::Ok => report.completed += 1,
            JobStatus::Warning => {
                report.completed += 1;
                report.warnings += 1;
            }
            JobStatus::Error => {
                report.completed += 1;
                report.errors += 1;
            }
        }

        report.lines.push(ReportLine {
            status,
            name: job.name.clone(),
            pid: job.pid,
            start_time: job.start_time,
            duration_secs: duration.map(|d| d.num_seconds()),
            duration_display: duration.map(format_duration),
        });
    }

    report
}

/// Format a duration as `33s` under a minute, `14m33s` from there up.
/// Minutes truncate; there is no hour unit.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds();
    if seconds < 60 {
        format!("{}s", seconds)
    } else {
        format!("{}m{}s", seconds / 60, seconds % 60)
    }
}
