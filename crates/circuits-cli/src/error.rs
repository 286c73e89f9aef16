//! CLI error types with associated exit codes.
//!
//! Every [`CliError`] variant maps to one of two exit codes:
//!
//! - **2**: the input could not be read, parsed, or turned into a graph.
//!   Nothing has been searched yet.
//! - **1**: the search ran but produced no answer (no component at or above
//!   the requested vertex, or the search itself failed).
use std::fmt;
use std::path::PathBuf;

use circuits_core::CycleError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `circuits` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument does not exist.
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The process may not read a file.
    PermissionDenied {
        /// The unreadable path.
        path: PathBuf,
    },

    /// The input is larger than `--max-file-size`.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured limit in bytes.
        limit: u64,
        /// The file size, when known (never for stdin).
        actual: Option<u64>,
    },

    /// The input is not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// Offset of the first invalid byte.
        byte_offset: usize,
    },

    /// Reading stdin failed.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O failure, including writes to stdout.
    IoError {
        /// What was being read or written.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed JSON graph document.
    ParseFailed {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The JSON parser's message, including line and column.
        detail: String,
    },

    /// The document parsed but does not describe a valid graph.
    InvalidGraph {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// What is wrong with the graph.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// No strongly connected component exists at or above the cursor.
    NoComponent {
        /// The requested cursor.
        from: usize,
    },

    /// The cycle search reported an internal error.
    SearchFailed {
        /// The error reported by `circuits-core`.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidGraph { .. } => 2,

            Self::NoComponent { .. } | Self::SearchFailed { .. } => 1,
        }
    }

    /// Returns the message printed to stderr before exiting.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { source, detail } => {
                format!("error: {source} is not a valid graph document: {detail}")
            }
            Self::InvalidGraph { source, detail } => {
                format!("error: invalid graph in {source}: {detail}")
            }
            Self::NoComponent { from } => {
                format!("error: no strongly connected component at or above vertex {from}")
            }
            Self::SearchFailed { detail } => {
                format!("error: cycle search failed: {detail}")
            }
        }
    }

    /// Wraps a [`CycleError`] raised while loading or searching `source`.
    ///
    /// Malformed input becomes [`CliError::InvalidGraph`]; anything else is a
    /// search failure.
    pub fn from_cycle_error(source: &str, err: &CycleError) -> Self {
        if err.is_invalid_input() {
            Self::InvalidGraph {
                source: source.to_owned(),
                detail: err.to_string(),
            }
        } else {
            Self::SearchFailed {
                detail: err.to_string(),
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
