use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Lifecycle marker carried by a log record.
///
/// Matching is case-sensitive: anything that is not exactly `START` or
/// `END` is preserved as `Other` and ignored by reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    End,
    Other(String),
}

impl From<&str> for Action {
    fn from(raw: &str) -> Self {
        match raw {
            "START" => Action::Start,
            "END" => Action::End,
            other => Action::Other(other.to_string()),
        }
    }
}

/// A single observed occurrence from the log. Immutable once constructed;
/// produced one-per-record by the ingest boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Time of day the record was logged (HH:MM:SS, no date component).
    pub timestamp: NaiveTime,
    /// Free-text job identifier; not unique on its own.
    pub job_name: String,
    pub action: Action,
    /// Process identifier of the execution that logged the record.
    pub pid: u32,
}

impl Event {
    pub fn new(
        timestamp: NaiveTime,
        job_name: impl Into<String>,
        action: Action,
        pid: u32,
    ) -> Self {
        Self {
            timestamp,
            job_name: job_name.into(),
            action,
            pid,
        }
    }
}
