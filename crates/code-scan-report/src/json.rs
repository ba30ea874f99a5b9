//! JSON rendering of the aggregated report.

use code_scan_core::{Category, CategoryGroup, Diagnostic, ExitStatus, Report};
use serde::Serialize;
use std::io::{self, Write};

use crate::Formatter;

/// Per-category totals, every category present.
#[derive(Debug, Serialize)]
struct Summary {
    security: usize,
    reliability: usize,
    performance: usize,
    general: usize,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: ExitStatus,
    exit_code: i32,
    total: usize,
    rule_count: usize,
    summary: Summary,
    categories: &'a [CategoryGroup],
}

/// Pretty-printed JSON of the grouped report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Serializes an already aggregated report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the sink fails.
    pub fn write_report(report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let status = report.status();
        let doc = JsonReport {
            status,
            exit_code: status.code(),
            total: report.total,
            rule_count: report.rule_count,
            summary: Summary {
                security: report.category_total(Category::Security),
                reliability: report.category_total(Category::Reliability),
                performance: report.category_total(Category::Performance),
                general: report.category_total(Category::General),
            },
            categories: &report.categories,
        };
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()> {
        Self::write_report(&Report::build(diagnostics), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_scan_core::Location;
    use serde_json::Value;

    #[test]
    fn json_carries_summary_and_groups() {
        let diagnostics = [
            Diagnostic::new("performance.loop", Location::new("/app/A.php", 3), "slow"),
            Diagnostic::generic("Parse error"),
        ];
        let mut out = Vec::new();
        JsonFormatter.format(&diagnostics, &mut out).unwrap();
        let doc: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(doc["status"], "issues_found");
        assert_eq!(doc["exit_code"], 1);
        assert_eq!(doc["total"], 2);
        assert_eq!(doc["summary"]["performance"], 1);
        assert_eq!(doc["summary"]["security"], 0);
        assert_eq!(doc["categories"][0]["category"], "Performance");
        assert_eq!(doc["categories"][1]["rules"][0]["identifier"], "pderas.generic");
        assert_eq!(
            doc["categories"][1]["rules"][0]["items"][0]["location"]["kind"],
            "generic"
        );
    }

    #[test]
    fn empty_json_is_clean() {
        let mut out = Vec::new();
        JsonFormatter.format(&[], &mut out).unwrap();
        let doc: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["status"], "clean");
        assert_eq!(doc["categories"], Value::Array(vec![]));
    }
}
