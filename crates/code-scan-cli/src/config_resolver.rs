//! Locating `code-scan.toml`.
//!
//! Lookup order:
//!
//! 1. `--config <path>`, used as given
//! 2. `code-scan.toml` or `.code-scan.toml` in the working directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in the global directory (`$CODE_SCAN_CONFIG_DIR`,
//!    otherwise `~/.code-scan/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// File names recognised in a project directory, in preference order.
const PROJECT_FILES: [&str; 2] = ["code-scan.toml", ".code-scan.toml"];

/// File name inside the global directory.
const GLOBAL_FILE: &str = "config.toml";

/// Overrides the global directory.
const GLOBAL_DIR_VAR: &str = "CODE_SCAN_CONFIG_DIR";

/// The configuration file that was settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project tree.
    Project(PathBuf),
    /// Found in the global directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the file to load, unless defaults apply.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether the file came from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the configuration for a scan started in `start`.
#[must_use]
pub fn resolve(start: &Path, explicit: Option<&Path>) -> ConfigSource {
    lookup(start, explicit, global_dir().as_deref())
}

/// The global directory, if one can be determined.
#[must_use]
pub fn global_dir() -> Option<PathBuf> {
    match std::env::var_os(GLOBAL_DIR_VAR) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home::home_dir().map(|home| home.join(".code-scan")),
    }
}

fn lookup(start: &Path, explicit: Option<&Path>, global: Option<&Path>) -> ConfigSource {
    // The caller reports a missing explicit file when loading it.
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = find_in_project(start) {
        tracing::debug!("Using project config {}", found.display());
        return ConfigSource::Project(found);
    }

    global
        .map(|dir| dir.join(GLOBAL_FILE))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Using global config {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

fn find_in_project(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
