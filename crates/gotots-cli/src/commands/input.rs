//! Locating and reading the Go input file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Absolute path of the input file, resolved against `cwd`.
pub fn resolve_file(file: Option<&Path>, cwd: &Path) -> Result<PathBuf, CliError> {
    let file = file
        .filter(|f| !f.as_os_str().is_empty())
        .ok_or(CliError::NoInput)?;
    Ok(cwd.join(file))
}

pub fn load_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
