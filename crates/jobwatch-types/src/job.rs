use chrono::{Duration, NaiveTime};
use std::collections::HashMap;

use crate::event::Event;

/// Composite key identifying one execution instance of a named job.
///
/// A retried run reuses the name under a new pid and counts as a distinct
/// execution; an unrelated process can reuse a pid under another name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId {
    pub name: String,
    pub pid: u32,
}

impl JobId {
    pub fn of(event: &Event) -> Self {
        Self {
            name: event.job_name.clone(),
            pid: event.pid,
        }
    }
}

/// Reconstructed lifecycle of one job execution.
///
/// Created from a START event and closed in place by a matching END.
/// At most one live `Job` exists per [`JobId`] during a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub pid: u32,
    pub start_time: NaiveTime,
    /// Absent until a matching END event is observed.
    pub end_time: Option<NaiveTime>,
}

impl Job {
    /// A freshly started job with no observed end.
    pub fn started(name: impl Into<String>, pid: u32, start_time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            pid,
            start_time,
            end_time: None,
        }
    }

    /// Elapsed time between start and end, if the job has ended.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Mapping from job identity to its reconstructed lifecycle record.
/// Iteration order is unspecified; display ordering is the report
/// generator's responsibility.
pub type JobMap = HashMap<JobId, Job>;
