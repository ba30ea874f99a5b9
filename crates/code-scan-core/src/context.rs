//! Analysis scope handed to rules alongside each node.

use std::path::{Path, PathBuf};

use crate::types::Location;

/// Context provided to rules for the file currently being analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Path of the file being analysed, as the engine reports it.
    pub path: PathBuf,
}

impl Scope {
    /// Creates a new scope for a file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds a file-scoped location at the given line.
    #[must_use]
    pub fn location(&self, line: usize) -> Location {
        Location::new(self.path.clone(), line)
    }
}
