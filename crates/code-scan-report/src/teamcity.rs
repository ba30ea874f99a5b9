//! TeamCity inspection service messages.

use code_scan_core::{classify, Diagnostic, Severity};
use std::collections::HashSet;
use std::io::{self, Write};

use crate::Formatter;

/// Emits an `inspectionType` per identifier and an `inspection` per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamcityFormatter;

/// Escapes a service-message value.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => out.push_str("||"),
            '\'' => out.push_str("|'"),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            other => out.push(other),
        }
    }
    out
}

impl Formatter for TeamcityFormatter {
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()> {
        let mut declared: HashSet<&str> = HashSet::new();
        for d in diagnostics {
            let meta = classify(&d.identifier);
            let id = escape(&d.identifier);
            if declared.insert(d.identifier.as_str()) {
                writeln!(
                    out,
                    "##teamcity[inspectionType id='{id}' name='{}' category='{}' description='{}']",
                    escape(&meta.label),
                    meta.category,
                    escape(&meta.label)
                )?;
            }
            let severity = match meta.severity {
                Severity::Error => "ERROR",
                Severity::Warning => "WARNING",
            };
            let line = d
                .location
                .line()
                .map(|l| format!(" line='{l}'"))
                .unwrap_or_default();
            writeln!(
                out,
                "##teamcity[inspection typeId='{id}' message='{}' file='{}'{line} SEVERITY='{severity}']",
                escape(&d.message),
                escape(&d.location.file_display()),
            )?;
        }
        Ok(())
    }
}
