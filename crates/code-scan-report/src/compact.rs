//! One line per diagnostic, in input order.

use code_scan_core::{classify, Diagnostic};
use std::io::{self, Write};

use crate::Formatter;

/// `file:line: severity [identifier] message`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactFormatter;

impl Formatter for CompactFormatter {
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()> {
        for d in diagnostics {
            let severity = classify(&d.identifier).severity;
            match d.location.line() {
                Some(line) => write!(out, "{}:{line}: ", d.location.file_display())?,
                None => write!(out, "{}: ", d.location.file_display())?,
            }
            writeln!(out, "{severity} [{}] {}", d.identifier, d.message)?;
        }
        Ok(())
    }
}
