//! Project configuration file discovery and loading.
//!
//! A `gotots.yaml` (or `gotots.yml`) is searched for from a start directory
//! upwards. The search ends at the first directory containing `go.mod`
//! (after checking that directory) or at the filesystem root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

/// Config file names, in lookup order within one directory.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["gotots.yaml", "gotots.yml"];

/// File marking a Go module root; the search does not go above it.
const MODULE_ROOT_MARKER: &str = "go.mod";

/// Settings read from a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    /// Output file or directory; empty means stdout.
    #[serde(default)]
    pub out_path: String,
    #[serde(default)]
    pub use_comments: bool,
}

/// A config together with the directory its relative paths resolve against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: FileConfig,
    pub base_dir: PathBuf,
    /// File the config came from; `None` when defaults are in effect.
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    fn defaults(base_dir: &Path) -> Self {
        Self {
            config: FileConfig::default(),
            base_dir: base_dir.to_path_buf(),
            path: None,
        }
    }

    /// Read a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let config = load(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self {
            config,
            base_dir,
            path: Some(path.to_path_buf()),
        })
    }

    /// Search from `start` and load the nearest config, or defaults.
    pub fn discover(start: &Path) -> Result<Self, CliError> {
        match find_config(start) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::defaults(start)),
        }
    }

    /// Output destination for `go_file`, or `None` for stdout.
    pub fn output_path(&self, go_file: &Path) -> Option<PathBuf> {
        resolve_output(Path::new(&self.config.out_path), &self.base_dir, go_file)
    }
}

/// Nearest config file at or above `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found config file");
                return Some(candidate);
            }
        }
        if dir.join(MODULE_ROOT_MARKER).exists() {
            tracing::debug!(dir = %dir.display(), "stopping config search at module root");
            return None;
        }
    }
    None
}

/// Parse a config file. Unknown keys are ignored.
pub fn load(path: &Path) -> Result<FileConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse config file contents; an empty document yields defaults.
pub fn parse(content: &str) -> Result<FileConfig, serde_yml::Error> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yml::from_str(content)
}

/// Resolve an output path against `base_dir`.
///
/// An empty path means stdout. A path naming an existing directory gets
/// `<go file stem>.ts` appended.
pub fn resolve_output(out: &Path, base_dir: &Path, go_file: &Path) -> Option<PathBuf> {
    if out.as_os_str().is_empty() {
        return None;
    }

    let resolved = base_dir.join(out);
    if !resolved.is_dir() {
        return Some(resolved);
    }

    let stem = go_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Some(resolved.join(format!("{stem}.ts")))
}
