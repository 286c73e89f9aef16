mod cli;
mod cmd;
mod document;
mod error;
mod io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level chosen
/// by `--quiet` / `--verbose`.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Cycles { file, count } => {
            let doc = load(file, cli.max_file_size)?;
            cmd::cycles::run(&doc, &file.label(), *count, &cli.format)
        }
        Command::Scc { file, from } => {
            let doc = load(file, cli.max_file_size)?;
            cmd::scc::run(&doc, *from, &cli.format)
        }
    }
}

fn load(file: &PathOrStdin, max_file_size: u64) -> Result<document::GraphDocument, CliError> {
    let content = io::read_input(file, max_file_size)?;
    document::parse_document(&content, &file.label(), max_file_size)
}
