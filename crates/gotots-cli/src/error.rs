//! Errors surfaced by CLI commands.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no input file: pass FILE or set GOFILE")]
    NoInput,

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: gotots_lib::Error,
    },

    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize declarations: {0}")]
    Json(#[from] serde_json::Error),
}
