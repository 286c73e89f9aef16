#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["cycles", "scc"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `circuits cycles --help` must mention `--count` and `FILE`.
#[test]
fn test_cycles_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("cycles")
        .expect("cycles subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--count"), "cycles help should mention --count");
    assert!(help.contains("FILE"), "cycles help should mention FILE");
}

/// `circuits scc --help` must mention `--from`.
#[test]
fn test_scc_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("scc")
        .expect("scc subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--from"), "scc help should mention --from");
}

#[test]
fn test_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_dash_parses_as_stdin() {
    let cli = Cli::try_parse_from(["circuits", "cycles", "-"]).expect("parse");
    match cli.command {
        Command::Cycles { file, count } => {
            assert!(matches!(file, PathOrStdin::Stdin));
            assert!(!count);
        }
        other @ Command::Scc { .. } => panic!("unexpected command: {}", command_name(&other)),
    }
}

#[test]
fn test_scc_from_defaults_to_zero() {
    let cli = Cli::try_parse_from(["circuits", "scc", "g.json"]).expect("parse");
    match cli.command {
        Command::Scc { from, file } => {
            assert_eq!(from, 0);
            assert_eq!(file.label(), "g.json");
        }
        other @ Command::Cycles { .. } => panic!("unexpected command: {}", command_name(&other)),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["circuits", "cycles", "g.json", "-f", "json", "--verbose"])
        .expect("parse");
    assert!(matches!(cli.format, OutputFormat::Json));
    assert_eq!(cli.log_level(), "debug");
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let result = Cli::try_parse_from(["circuits", "--quiet", "--verbose", "cycles", "g.json"]);
    assert!(result.is_err(), "--quiet and --verbose must conflict");
}

#[test]
fn test_default_log_level_is_warn() {
    let cli = Cli::try_parse_from(["circuits", "cycles", "g.json"]).expect("parse");
    assert_eq!(cli.log_level(), "warn");
    let quiet = Cli::try_parse_from(["circuits", "-q", "cycles", "g.json"]).expect("parse");
    assert_eq!(quiet.log_level(), "error");
}

#[test]
fn test_max_file_size_flag() {
    let cli = Cli::try_parse_from(["circuits", "--max-file-size", "10", "scc", "g.json"])
        .expect("parse");
    assert_eq!(cli.max_file_size, 10);
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Cycles { .. } => "cycles",
        Command::Scc { .. } => "scc",
    }
}
