// NOTE: jobwatch Architecture Rationale
//
// Why diagnostics-as-values (not a global logger)?
// - The tokenizer and the reconciler both observe recoverable anomalies
//   (short records, orphan ENDs); collecting them as plain values keeps
//   the engine side-effect-free and lets each output format decide how
//   to surface them (stderr lines for plain, a JSON array for json)
// - Per-record anomalies never abort the run; only an unreadable source is
//   fatal, so a fully malformed file still produces an (empty) report
//
// Why sort before rendering?
// - Job storage is a hash map keyed by (name, pid); iterating it directly
//   would make the report order vary between runs. The report generator
//   sorts by start time, then name, then pid, so identical input always
//   renders byte-identical output

mod args;
mod commands;
mod ingest;
mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
