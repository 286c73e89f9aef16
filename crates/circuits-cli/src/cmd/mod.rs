//! Command modules for the `circuits` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes the
//! parsed graph document and arguments, writes to stdout, and returns a
//! [`crate::error::CliError`] on failure.
pub mod cycles;
pub mod scc;

use crate::error::CliError;

/// Pretty-prints `value` followed by a newline.
pub(crate) fn write_json<W: std::io::Write>(
    w: &mut W,
    value: &serde_json::Value,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Converts a failed stdout write into a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
