use anyhow::Result;
use jobwatch_engine::Report;
use jobwatch_types::Diagnostic;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a Report,
    diagnostics: &'a [Diagnostic],
}

/// Serialize the report and diagnostics as one JSON document on stdout.
pub fn render(report: &Report, diagnostics: &[Diagnostic]) -> Result<()> {
    let payload = JsonOutput {
        report,
        diagnostics,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
