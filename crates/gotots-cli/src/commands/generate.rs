//! Generate TypeScript definitions for one Go file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use gotots_lib::Config;

use crate::config::{LoadedConfig, resolve_output};
use crate::error::CliError;

use super::input::{load_source, resolve_file};

pub struct GenerateArgs {
    pub file: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub comments: bool,
    pub config: Option<PathBuf>,
    pub export: bool,
    pub tag_key: String,
}

pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(|source| CliError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    run_in(args, &cwd)
}

/// Run with `cwd` as the invocation directory.
pub fn run_in(args: GenerateArgs, cwd: &Path) -> Result<(), CliError> {
    let path = resolve_file(args.file.as_deref(), cwd)?;
    tracing::info!("Generating for file {}", path.display());

    let loaded = match &args.config {
        Some(config_path) => LoadedConfig::from_file(&cwd.join(config_path))?,
        None => LoadedConfig::discover(cwd)?,
    };
    if let Some(config_path) = &loaded.path {
        tracing::debug!(path = %config_path.display(), "using config file");
    }

    let config = Config::new()
        .comments(args.comments || loaded.config.use_comments)
        .export(args.export)
        .tag_key(args.tag_key.as_str());
    let destination = match &args.out {
        Some(out) => resolve_output(out, cwd, &path),
        None => loaded.output_path(&path),
    };

    let source = load_source(&path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output = gotots_lib::generate(&source, &file_name, &config).map_err(|source| {
        CliError::Parse {
            path: path.clone(),
            source,
        }
    })?;
    tracing::debug!(comments = config.comments_enabled(), "rendered output");

    write_output(destination.as_deref(), &output)
}

/// Write to `destination`, or stdout when there is none.
fn write_output(destination: Option<&Path>, output: &str) -> Result<(), CliError> {
    let Some(path) = destination else {
        let mut stdout = std::io::stdout().lock();
        return stdout
            .write_all(output.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            });
    };

    let write_err = |source: std::io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, output).map_err(write_err)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
