use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Non-fatal anomaly observed while tokenizing or reconciling a log.
///
/// Diagnostics accumulate alongside the primary outputs instead of going
/// to a global logger; the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Record rejected at the tokenizer boundary before reaching the core.
    MalformedRecord { line: usize, reason: String },
    /// END event with no open matching START for its identity.
    OrphanEnd {
        name: String,
        pid: u32,
        timestamp: NaiveTime,
    },
    /// END event for a job that already received one. The first END wins.
    DuplicateEnd {
        name: String,
        pid: u32,
        timestamp: NaiveTime,
    },
    /// END timestamp earlier than the job's START (e.g. a run crossing
    /// midnight, which is out of scope). The END is rejected and the job
    /// stays open.
    EndBeforeStart {
        name: String,
        pid: u32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedRecord { line, reason } => {
                write!(f, "skipping line {}: {}", line, reason)
            }
            Diagnostic::OrphanEnd {
                name,
                pid,
                timestamp,
            } => write!(
                f,
                "found END for job {} (PID: {}) at {} without matching START",
                name, pid, timestamp
            ),
            Diagnostic::DuplicateEnd {
                name,
                pid,
                timestamp,
            } => write!(
                f,
                "duplicate END for job {} (PID: {}) at {}",
                name, pid, timestamp
            ),
            Diagnostic::EndBeforeStart {
                name,
                pid,
                start_time,
                end_time,
            } => write!(
                f,
                "END at {} precedes START at {} for job {} (PID: {})",
                end_time, start_time, name, pid
            ),
        }
    }
}
