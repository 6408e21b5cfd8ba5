//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the default command and the
//! subcommands describe the same inputs the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Environment variable `go generate` sets to the file being processed.
pub const GOFILE_ENV: &str = "GOFILE";

/// Go source file (positional, falls back to `$GOFILE`).
pub fn go_file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .env(GOFILE_ENV)
        .help("Go source file (defaults to $GOFILE, as set by go generate)")
}

/// Output destination (-o/--out).
pub fn out_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Output file or directory (overrides out-path from the config file)")
}

/// Emit documentation comments (--comments).
pub fn comments_arg() -> Arg {
    Arg::new("comments")
        .long("comments")
        .action(ArgAction::SetTrue)
        .help("Emit Go doc comments as /** */ blocks (overrides use-comments)")
}

/// Explicit config file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Config file to use instead of searching for gotots.yaml")
}

/// Don't export types (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export types")
}

/// Struct tag key (--tag-key).
pub fn tag_key_arg() -> Arg {
    Arg::new("tag_key")
        .long("tag-key")
        .value_name("KEY")
        .default_value(gotots_lib::typegen::typescript::DEFAULT_TAG_KEY)
        .help("Struct tag key consulted for renames and omitempty")
}
