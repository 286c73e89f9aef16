//! Implementation of `circuits cycles <file>`.
//!
//! Enumerates every elementary cycle of the document's graph.
//!
//! Output (human mode): one cycle per line, labels joined by ` -> `, in
//! discovery order. The closing edge back to the first label is implied.
//! With `--count`, only the number of cycles.
//!
//! Output (JSON mode): `{"cycles": [[...], ...], "count": N, "summary": {...}}`,
//! or `{"count": N}` with `--count`.
//!
//! Exit codes: 0 on success (zero cycles included), 1 if the search fails.
use circuits_core::{CycleSearch, SearchSummary};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::document::GraphDocument;
use crate::error::CliError;

/// Runs the `cycles` command.
///
/// # Errors
///
/// - [`CliError::SearchFailed`] if the search reports an internal error.
/// - [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    doc: &GraphDocument,
    source: &str,
    count_only: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let output = CycleSearch::new(&doc.graph)
        .run()
        .map_err(|e| CliError::from_cycle_error(source, &e))?;

    let cycles: Vec<Vec<String>> = output
        .cycles
        .iter()
        .map(|cycle| cycle.iter().map(|&v| doc.label(v)).collect())
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match (format, count_only) {
        (OutputFormat::Human, true) => writeln_count(&mut out, cycles.len()),
        (OutputFormat::Human, false) => print_human(&mut out, &cycles),
        (OutputFormat::Json, true) => write_json(&mut out, &json!({ "count": cycles.len() })),
        (OutputFormat::Json, false) => print_json(&mut out, &cycles, output.summary),
    }
    .map_err(|e| stdout_error(&e))
}

fn writeln_count<W: std::io::Write>(w: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(w, "{count}")
}

/// Writes one cycle per line, labels separated by ` -> `.
fn print_human<W: std::io::Write>(w: &mut W, cycles: &[Vec<String>]) -> std::io::Result<()> {
    for cycle in cycles {
        writeln!(w, "{}", cycle.join(" -> "))?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    cycles: &[Vec<String>],
    summary: SearchSummary,
) -> std::io::Result<()> {
    let summary = serde_json::to_value(summary).map_err(std::io::Error::other)?;
    write_json(
        w,
        &json!({
            "cycles": cycles,
            "count": cycles.len(),
            "summary": summary,
        }),
    )
}
