//! Show the parsed declaration model of a Go file.

use std::path::{Path, PathBuf};

use crate::error::CliError;

use super::input::{load_source, resolve_file};

pub struct AstArgs {
    pub file: Option<PathBuf>,
}

pub fn run(args: AstArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(|source| CliError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let path = resolve_file(args.file.as_deref(), &cwd)?;
    println!("{}", dump(&path)?);
    Ok(())
}

/// Pretty JSON for the declarations in `path`.
pub fn dump(path: &Path) -> Result<String, CliError> {
    let source = load_source(path)?;
    let file = gotots_lib::parser::parse(&source).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::to_string_pretty(&file)?)
}
