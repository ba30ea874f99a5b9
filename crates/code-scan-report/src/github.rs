//! GitHub Actions workflow-command annotations.

use code_scan_core::{classify, Diagnostic, Location, Severity};
use std::io::{self, Write};

use crate::Formatter;

/// Emits one `::error` / `::warning` command per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubFormatter;

fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

/// Escapes a command message.
fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escapes a command property value.
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Renders the annotation line for one diagnostic.
#[must_use]
pub fn annotation(d: &Diagnostic) -> String {
    let level = level(classify(&d.identifier).severity);
    let message = escape_data(&d.message);
    match &d.location {
        Location::File {
            path,
            line: Some(line),
        } => format!(
            "::{level} file={},line={line},col=0::{message}",
            escape_property(&path.display().to_string())
        ),
        Location::File { path, line: None } => format!(
            "::{level} file={}::{message}",
            escape_property(&path.display().to_string())
        ),
        Location::Generic => format!("::{level} ::{message}"),
    }
}

impl Formatter for GithubFormatter {
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()> {
        for d in diagnostics {
            writeln!(out, "{}", annotation(d))?;
        }
        Ok(())
    }
}
