//! Command builders for the CLI.

use clap::{Args, Command};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use super::args::*;

/// Build the complete CLI: the default generate command plus subcommands.
pub fn build_cli() -> Command {
    let cmd = Command::new("gotots")
        .about("Generate TypeScript type definitions from Go type declarations")
        .version(env!("CARGO_PKG_VERSION"))
        .args_conflicts_with_subcommands(true)
        .override_usage(
            "\
  gotots [FILE] [-o <PATH>] [--comments]
  gotots ast [FILE]",
        )
        .after_help(
            r#"EXAMPLES:
  //go:generate gotots               # in a Go file, uses $GOFILE
  gotots models.go                   # print to stdout
  gotots models.go -o web/types/     # write web/types/models.ts
  gotots models.go --comments        # keep doc comments
  gotots ast models.go               # inspect the parsed declarations

CONFIG:
  gotots.yaml (or gotots.yml) is looked up from the current directory
  upwards, stopping at the directory holding go.mod:
    out-path: ../web/src/types
    use-comments: true"#,
        )
        .arg(go_file_arg())
        .arg(out_arg())
        .arg(comments_arg())
        .arg(config_arg())
        .arg(no_export_arg())
        .arg(tag_key_arg())
        .subcommand(ast_command());

    Verbosity::<InfoLevel>::augment_args(cmd)
}

/// Show the parsed declaration model of a Go file.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the parsed declarations of a Go file as JSON")
        .arg(go_file_arg())
}
