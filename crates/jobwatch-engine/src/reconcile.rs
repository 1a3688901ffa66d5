use jobwatch_types::{Action, Diagnostic, Event, Job, JobId, JobMap};

/// Result of a reconciliation pass: the reconstructed jobs plus any
/// anomalies observed along the way.
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    pub jobs: JobMap,
    pub diagnostics: Vec<Diagnostic>,
}

/// Pair START and END events into job lifecycle records.
///
/// Events are consumed in input order. A later START for an identity whose
/// job never ended supersedes it silently; this models a restarted job or a
/// recycled pid, not an anomaly. END events that cannot close an open job
/// become diagnostics and change nothing. Actions other than START/END are
/// no-ops.
///
/// One pass; O(events) time, O(distinct identities) space.
pub fn reconcile(events: &[Event]) -> ReconcileOutcome {
    let mut outcome = ReconcileOutcome::default();

    for event in events {
        let id = JobId::of(event);

        match &event.action {
            Action::Start => {
                outcome.jobs.insert(
                    id,
                    Job::started(event.job_name.clone(), event.pid, event.timestamp),
                );
            }
            Action::End => match outcome.jobs.get_mut(&id) {
                Some(job) if job.is_complete() => {
                    outcome.diagnostics.push(Diagnostic::DuplicateEnd {
                        name: event.job_name.clone(),
                        pid: event.pid,
                        timestamp: event.timestamp,
                    });
                }
                Some(job) if event.timestamp < job.start_time => {
                    outcome.diagnostics.push(Diagnostic::EndBeforeStart {
                        name: event.job_name.clone(),
                        pid: event.pid,
                        start_time: job.start_time,
                        end_time: event.timestamp,
                    });
                }
                Some(job) => {
                    job.end_time = Some(event.timestamp);
                }
                None => {
                    outcome.diagnostics.push(Diagnostic::OrphanEnd {
                        name: event.job_name.clone(),
                        pid: event.pid,
                        timestamp: event.timestamp,
                    });
                }
            },
            Action::Other(_) => {}
        }
    }

    outcome
}
