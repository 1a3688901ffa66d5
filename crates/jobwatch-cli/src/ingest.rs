use anyhow::{Context, Result};
use chrono::NaiveTime;
use csv::{ReaderBuilder, Trim};
use jobwatch_types::{Action, Diagnostic, Event};
use std::path::Path;

/// Tokenize a comma-delimited log file into an ordered event sequence.
///
/// Each record needs at least four fields: timestamp (HH:MM:SS), job name,
/// action, pid. Extra fields are ignored. Records that fail field-count or
/// parsing checks are skipped with a [`Diagnostic::MalformedRecord`]; only
/// an unreadable source is fatal.
pub fn read_events(path: &Path) -> Result<(Vec<Event>, Vec<Diagnostic>)> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    let mut events = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, record) in reader.into_records().enumerate() {
        let line = index + 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                diagnostics.push(Diagnostic::MalformedRecord {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if record.len() < 4 {
            diagnostics.push(Diagnostic::MalformedRecord {
                line,
                reason: format!("expected at least 4 fields, got {}", record.len()),
            });
            continue;
        }

        let timestamp = match NaiveTime::parse_from_str(&record[0], "%H:%M:%S") {
            Ok(timestamp) => timestamp,
            Err(_) => {
                diagnostics.push(Diagnostic::MalformedRecord {
                    line,
                    reason: format!("invalid timestamp: {}", &record[0]),
                });
                continue;
            }
        };

        let pid = match record[3].parse::<u32>() {
            Ok(pid) => pid,
            Err(_) => {
                diagnostics.push(Diagnostic::MalformedRecord {
                    line,
                    reason: format!("invalid pid: {}", &record[3]),
                });
                continue;
            }
        };

        events.push(Event::new(
            timestamp,
            record[1].to_string(),
            Action::from(&record[2]),
            pid,
        ));
    }

    Ok((events, diagnostics))
}
