//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl PathOrStdin {
    /// Label used in error messages and log lines (`"-"` for stdin).
    pub fn label(&self) -> String {
        match self {
            PathOrStdin::Stdin => "-".to_owned(),
            PathOrStdin::Path(path) => path.display().to_string(),
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one record per line (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// All top-level subcommands exposed by the `circuits` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List every elementary cycle of a graph.
    Cycles {
        /// Path to a JSON graph document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Print only the number of cycles.
        #[arg(long)]
        count: bool,
    },

    /// Show the lowest strongly connected component at or above a vertex.
    Scc {
        /// Path to a JSON graph document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Smallest vertex index the component may contain (default: 0).
        #[arg(long, value_name = "N", default_value = "0")]
        from: usize,
    },
}

/// Root CLI struct for the `circuits` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "circuits",
    version,
    about = "Elementary cycle enumeration for directed graphs",
    long_about = "Enumerates every elementary cycle of a directed graph with Johnson's\n\
                  algorithm, and inspects the strongly connected components it walks."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log search progress to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CIRCUITS_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MiB).
    #[arg(
        long,
        global = true,
        env = "CIRCUITS_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}

impl Cli {
    /// Log filter directive implied by `--quiet` / `--verbose`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests;
