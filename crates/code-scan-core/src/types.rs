//! Core types for scan diagnostics and their classification.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Identifier used for findings that carry no identifier of their own.
pub const GENERIC_IDENTIFIER: &str = "pderas.generic";

/// Display sentinel for findings that are not tied to a file.
pub const GENERIC_FILE: &str = "[generic]";

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Display bucket for a diagnostic.
///
/// The declaration order is the rendering priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Banned constructs that are unsafe to ship.
    Security,
    /// Typing, dead code and deprecated usage.
    Reliability,
    /// Known slow patterns.
    Performance,
    /// Everything the classifier does not recognise.
    General,
}

impl Category {
    /// All categories in rendering priority order.
    pub const ALL: [Self; 4] = [
        Self::Security,
        Self::Reliability,
        Self::Performance,
        Self::General,
    ];

    /// Returns the display name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Reliability => "Reliability",
            Self::Performance => "Performance",
            Self::General => "General",
        }
    }

    /// Position in the rendering priority order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    /// A line within a source file.
    File {
        /// Source path as reported by the analysis engine.
        path: PathBuf,
        /// Line number (1-indexed), when the finding has one.
        line: Option<usize>,
    },
    /// Not tied to any file.
    Generic,
}

impl Location {
    /// Creates a file-scoped location.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::File {
            path: path.into(),
            line: Some(line),
        }
    }

    /// Creates a file-scoped location without a line.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            line: None,
        }
    }

    /// Returns the source path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Generic => None,
        }
    }

    /// Returns the line number, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::File { line, .. } => *line,
            Self::Generic => None,
        }
    }

    /// Returns the file for display, or the generic sentinel.
    #[must_use]
    pub fn file_display(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Generic => GENERIC_FILE.to_string(),
        }
    }
}

/// A single finding produced by a rule or by the external analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Dotted identifier (e.g., `pderas.disallow.exit`).
    pub identifier: String,
    /// Where the finding points to.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new file-scoped diagnostic.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            location,
            message: message.into(),
        }
    }

    /// Wraps a message that is not tied to a file.
    #[must_use]
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(GENERIC_IDENTIFIER, Location::Generic, message)
    }

    /// Returns true if this diagnostic is not tied to a file.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        matches!(self.location, Location::Generic)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Location::File {
                path,
                line: Some(line),
            } => write!(f, "{}:{line}: ", path.display())?,
            Location::File { path, line: None } => write!(f, "{}: ", path.display())?,
            Location::Generic => write!(f, "{GENERIC_FILE}: ")?,
        }
        write!(f, "[{}] {}", self.identifier, self.message)
    }
}

/// Classification derived from a diagnostic identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMeta {
    /// Display bucket.
    pub category: Category,
    /// Severity of the rule.
    pub severity: Severity,
    /// Human-readable rule label.
    pub label: String,
}

impl RuleMeta {
    /// Creates a new rule classification.
    #[must_use]
    pub fn new(category: Category, severity: Severity, label: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_matches_priority() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["Security", "Reliability", "Performance", "General"]);
        assert!(Category::Security < Category::General);
        assert_eq!(Category::Performance.index(), 2);
    }

    #[test]
    fn generic_diagnostic_uses_sentinel() {
        let d = Diagnostic::generic("Parse error");
        assert!(d.is_generic());
        assert_eq!(d.identifier, GENERIC_IDENTIFIER);
        assert_eq!(d.location.file_display(), "[generic]");
        assert_eq!(d.location.line(), None);
    }

    #[test]
    fn display_includes_location_and_identifier() {
        let d = Diagnostic::new(
            "pderas.disallow.exit",
            Location::new("/app/X.php", 3),
            "Disallowed exit/die usage.",
        );
        assert_eq!(
            d.to_string(),
            "/app/X.php:3: [pderas.disallow.exit] Disallowed exit/die usage."
        );
    }

    #[test]
    fn file_location_without_line() {
        let loc = Location::file("/app/X.php");
        assert_eq!(loc.line(), None);
        assert_eq!(loc.path(), Some(Path::new("/app/X.php")));
        let d = Diagnostic::new("deadCode.x", loc, "dead");
        assert_eq!(d.to_string(), "/app/X.php: [deadCode.x] dead");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, "\"error\"");
    }
}
