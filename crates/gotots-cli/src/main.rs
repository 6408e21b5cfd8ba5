mod cli;
mod commands;
mod config;
mod error;


use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_subscriber::EnvFilter;

use cli::{AstParams, GenerateParams, build_cli};

/// Crates whose logs follow the verbosity flags; everything else stays at warn.
const CRATES: &[&str] = &["gotots", "gotots_lib", "gotots_core"];

fn main() {
    let matches = build_cli().get_matches();
    init_logging(&matches);

    let result = match matches.subcommand() {
        Some(("ast", m)) => commands::ast::run(AstParams::from_matches(m).into()),
        Some(_) => unreachable!("clap should have caught this"),
        None => commands::generate::run(GenerateParams::from_matches(&matches).into()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber so stdout carries only generated output.
fn init_logging(matches: &clap::ArgMatches) {
    let level = <Verbosity<InfoLevel> as clap::FromArgMatches>::from_arg_matches(matches)
        .map(|v| v.tracing_level_filter())
        .unwrap_or(tracing::level_filters::LevelFilter::INFO);
    let allowlist: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    let filter = EnvFilter::new(format!("warn,{}", allowlist.join(",")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
