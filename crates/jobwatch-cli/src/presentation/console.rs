use is_terminal::IsTerminal;
use jobwatch_engine::{JobStatus, Report, ReportLine};
use jobwatch_types::Diagnostic;
use owo_colors::OwoColorize;

/// Render the report as a console listing plus a one-line summary.
/// Diagnostics go to stderr so piped stdout stays clean.
pub fn render(report: &Report, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    let color = std::io::stdout().is_terminal();

    println!("===== LOG MONITORING REPORT =====");
    println!();

    for line in &report.lines {
        println!("{}", format_line(line, color));
    }

    println!();
    println!(
        "SUMMARY: {} completed, {} running, {} warnings, {} errors",
        report.completed, report.running, report.warnings, report.errors
    );
}

fn format_line(line: &ReportLine, color: bool) -> String {
    let tag = format!("{}:", line.status);
    let tag = if color {
        match line.status {
            JobStatus::Running => tag.cyan().to_string(),
            JobStatus::Ok => tag.green().to_string(),
            JobStatus::Warning => tag.yellow().to_string(),
            JobStatus::Error => tag.red().to_string(),
        }
    } else {
        tag
    };

    let start = line.start_time.format("%H:%M:%S");

    match line.status {
        JobStatus::Running => format!(
            "{:<9} {:<25} (PID: {}) - Started at {} (still running)",
            tag, line.name, line.pid, start
        ),
        JobStatus::Ok | JobStatus::Warning | JobStatus::Error => {
            let duration = line.duration_display.as_deref().unwrap_or("-");
            let note = match line.status {
                JobStatus::Error => " (>10min)",
                JobStatus::Warning => " (>5min)",
                _ => "",
            };
            format!(
                "{:<9} {:<25} (PID: {}) - Started at {} - Duration: {}{}",
                tag, line.name, line.pid, start, duration, note
            )
        }
    }
}
