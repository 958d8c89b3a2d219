//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// TypeScript file to read or rewrite (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript source file")
}

/// Dotted property path (positional).
pub fn property_path_arg() -> Arg {
    Arg::new("property_path")
        .value_name("PATH")
        .required(true)
        .help("Dotted property path, e.g. AppConfig.api.port")
}

/// New value as JSON (positional).
pub fn json_value_arg() -> Arg {
    Arg::new("value")
        .value_name("JSON")
        .required(true)
        .help("New value as JSON (strings must be quoted)")
}

/// Schema file or folder (positional, defaults to the current directory).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("PATH")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Schema file or folder searched for *.schema.ts")
}

/// Prepend documentation comments (-c/--commented).
pub fn commented_arg() -> Arg {
    Arg::new("commented")
        .short('c')
        .long("commented")
        .action(ArgAction::SetTrue)
        .help("Prepend a documentation comment to each interface")
}

/// Debug logging (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::SetTrue)
        .help("Log every step")
}

/// Schema endpoint base URL (--api-url).
pub fn api_url_arg() -> Arg {
    Arg::new("api_url")
        .long("api-url")
        .value_name("URL")
        .help("Base URL of the schema endpoint")
}

/// User sent as `Authorization-User` (--api-user).
pub fn api_user_arg() -> Arg {
    Arg::new("api_user")
        .long("api-user")
        .value_name("ID")
        .help("User id sent with schema requests")
}

/// Offline schema folder (--fixtures).
pub fn fixtures_arg() -> Arg {
    Arg::new("fixtures")
        .long("fixtures")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Read schemas from DIR/{backend}.json instead of the API")
}

/// Configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (default: ./codeweave.toml when present)")
}

/// Include anonymous nodes (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include anonymous nodes (literals, punctuation)")
}

/// Node kinds to list (-k, --kind), repeatable.
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .short('k')
        .long("kind")
        .value_name("KIND")
        .action(ArgAction::Append)
        .conflicts_with("raw")
        .help("Only list nodes of this kind, with their byte ranges")
}

/// Print the result without writing it (--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Print the rewritten file instead of saving it")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
