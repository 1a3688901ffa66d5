use anyhow::{Context, Result};
use chrono::Local;
use jobwatch_engine::Report;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Persist the aggregate counts with a generation timestamp.
pub fn write(path: &Path, report: &Report) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(
        file,
        "Log Monitoring Report - Generated at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file, "=================================================")?;
    writeln!(file, "Jobs Completed: {}", report.completed)?;
    writeln!(file, "Jobs Running: {}", report.running)?;
    writeln!(file, "Warnings (>5min): {}", report.warnings)?;
    writeln!(file, "Errors (>10min): {}", report.errors)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_engine::generate_report;
    use jobwatch_types::JobMap;
    use tempfile::TempDir;

    #[test]
    fn test_summary_file_contains_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monitoring_report.txt");
        let report = generate_report(&JobMap::new());

        write(&path, &report).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Log Monitoring Report - Generated at "));
        assert!(contents.contains("Jobs Completed: 0"));
        assert!(contents.contains("Jobs Running: 0"));
        assert!(contents.contains("Warnings (>5min): 0"));
        assert!(contents.contains("Errors (>10min): 0"));
    }

    #[test]
    fn test_unwritable_destination_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("report.txt");
        let report = generate_report(&JobMap::new());

        assert!(write(&path, &report).is_err());
    }
}
