//! Ingestion of findings reported by the external analysis engine.
//!
//! The engine reports two streams: findings tied to a file and line, and
//! plain messages that are not tied to any file. Both are merged into one
//! ordered diagnostic sequence, file findings first. No sorting happens here;
//! insertion order is the tie-break for later grouping.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::context::Scope;
use crate::node::Node;
use crate::types::{Diagnostic, Location, GENERIC_IDENTIFIER};

/// Errors that can occur while reading engine output.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The output is not valid JSON.
    #[error("Invalid engine output: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but not shaped like engine output.
    #[error("Unexpected engine output: {message}")]
    Shape {
        /// What was wrong.
        message: String,
    },
}

/// A finding the engine attributes to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFinding {
    /// Source path.
    pub file: PathBuf,
    /// Line number (1-indexed), absent when the engine gave none.
    #[serde(default)]
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
    /// Identifier, when the engine or rule provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl FileFinding {
    /// Converts into a diagnostic, defaulting the identifier.
    #[must_use]
    pub fn into_diagnostic(self) -> Diagnostic {
        let identifier = self
            .identifier
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| GENERIC_IDENTIFIER.to_string());
        let location = Location::File {
            path: self.file,
            line: self.line,
        };
        Diagnostic::new(identifier, location, self.message)
    }
}

impl From<Diagnostic> for FileFinding {
    fn from(d: Diagnostic) -> Self {
        let line = d.location.line();
        let file = d.location.path().map(PathBuf::from).unwrap_or_default();
        Self {
            file,
            line,
            message: d.message,
            identifier: Some(d.identifier),
        }
    }
}

/// Everything one analysis pass reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// File-scoped findings, in the order reported.
    pub file_errors: Vec<FileFinding>,
    /// Messages not tied to a file, in the order reported.
    pub generic_errors: Vec<String>,
}

/// One message in the engine's JSON error output.
#[derive(Debug, Deserialize)]
struct EngineMessage {
    message: String,
    #[serde(default)]
    line: Option<usize>,
    #[serde(default)]
    identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EngineFile {
    #[serde(default)]
    messages: Vec<EngineMessage>,
}

#[derive(Debug, Deserialize)]
struct EngineOutput {
    #[serde(default)]
    files: Value,
    #[serde(default)]
    errors: Vec<String>,
}

impl AnalysisResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the engine's JSON error output.
    ///
    /// The `files` object keeps the engine's ordering. An empty `files` list
    /// (emitted when nothing was found) is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON or `files` is neither an
    /// object nor an empty list.
    pub fn from_engine_json(input: &str) -> Result<Self, IngestError> {
        let output: EngineOutput = serde_json::from_str(input)?;
        let mut result = Self::new();

        match output.files {
            Value::Object(files) => {
                for (path, entry) in files {
                    let entry: EngineFile = serde_json::from_value(entry)?;
                    debug!("{}: {} message(s)", path, entry.messages.len());
                    for m in entry.messages {
                        result.file_errors.push(FileFinding {
                            file: PathBuf::from(&path),
                            line: m.line,
                            message: m.message,
                            identifier: m.identifier,
                        });
                    }
                }
            }
            Value::Array(list) if list.is_empty() => {}
            Value::Null => {}
            other => {
                return Err(IngestError::Shape {
                    message: format!("`files` must be an object, got {other}"),
                })
            }
        }

        result.generic_errors = output.errors;
        Ok(result)
    }

    /// Appends rule diagnostics as file-scoped findings.
    ///
    /// Generic diagnostics go to the generic stream instead.
    pub fn push_diagnostics<I>(&mut self, diagnostics: I)
    where
        I: IntoIterator<Item = Diagnostic>,
    {
        for d in diagnostics {
            if d.is_generic() {
                self.generic_errors.push(d.message);
            } else {
                self.file_errors.push(FileFinding::from(d));
            }
        }
    }

    /// Total number of findings in both streams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.file_errors.len() + self.generic_errors.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges both streams into one diagnostic sequence, file findings first.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::with_capacity(self.len());
        diagnostics.extend(self.file_errors.into_iter().map(FileFinding::into_diagnostic));
        diagnostics.extend(self.generic_errors.into_iter().map(Diagnostic::generic));
        diagnostics
    }
}

/// The nodes a parser extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNodes {
    /// The file the nodes belong to.
    pub scope: Scope,
    /// Nodes in source order.
    pub nodes: Vec<Node>,
}

/// Parses a parser's node stream: a JSON object mapping each file path to
/// its nodes. File order is kept.
///
/// # Errors
///
/// Returns an error if the input is not JSON, is not an object, or a file's
/// entry is not a list of nodes.
pub fn parse_node_streams(input: &str) -> Result<Vec<FileNodes>, IngestError> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Object(files) = value else {
        return Err(IngestError::Shape {
            message: "node stream must be an object keyed by file path".to_string(),
        });
    };

    let mut streams = Vec::with_capacity(files.len());
    for (path, entry) in files {
        let nodes: Vec<Node> = serde_json::from_value(entry).map_err(|e| IngestError::Shape {
            message: format!("{path}: {e}"),
        })?;
        debug!("{}: {} node(s)", path, nodes.len());
        streams.push(FileNodes {
            scope: Scope::new(path),
            nodes,
        });
    }
    Ok(streams)
}
