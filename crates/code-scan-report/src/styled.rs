//! Styled, human-oriented terminal report.
//!
//! Layout:
//!
//! ```text
//! Code Scan Results
//! Found 4 issue(s) across 2 rule(s)
//!
//! Security (3)
//! ============
//!
//!  Disallowed debug helper (3)  pderas.disallow.debug
//! <table: Line | Error>
//!
//! Summary: Security 3, Reliability 1, Performance 0, General 0
//! ```

use code_scan_core::{
    Category, Diagnostic, ExitStatus, Location, Report, ReportConfig, RuleGroup,
};
use comfy_table::{presets, Cell, Table};
use nu_ansi_term::{Color, Style};
use std::io::{self, Write};

use crate::link::{deep_link, display_path, hyperlink, printable};
use crate::Formatter;

/// Line printed when there is nothing to report.
pub const NO_ISSUES: &str = "[OK] No issues found";

/// Marker shown in the line column of generic findings.
pub const NO_LINE: &str = "-";

/// Options controlling the styled report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Deep-link template (see [`deep_link`]).
    pub url_template: String,
    /// Marker displayed paths are shortened to.
    pub source_root: String,
    /// Emit ANSI colours.
    pub color: bool,
    /// Emit OSC 8 hyperlinks for file locations.
    pub hyperlinks: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            url_template: config.url_template.clone(),
            source_root: config.source_root.clone(),
            color: true,
            hyperlinks: true,
        }
    }
}

impl ReportOptions {
    /// Plain output: no colours, no hyperlinks.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            hyperlinks: false,
            ..Self::default()
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Security => Color::Red,
        Category::Reliability => Color::Yellow,
        Category::Performance => Color::Cyan,
        Category::General => Color::White,
    }
}

/// Renders the grouped report with tables and deep links.
#[derive(Debug, Clone, Default)]
pub struct StyledReporter {
    options: ReportOptions,
}

impl StyledReporter {
    /// Creates a reporter with the given options.
    #[must_use]
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.options.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Writes an already aggregated report.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sink.
    pub fn write_report(&self, report: &Report, out: &mut dyn Write) -> io::Result<ExitStatus> {
        if report.is_empty() {
            writeln!(out, "{}", self.paint(Color::LightGreen.normal(), NO_ISSUES))?;
            return Ok(ExitStatus::Clean);
        }

        writeln!(out)?;
        writeln!(out, "{}", self.paint(Style::new().bold(), "Code Scan Results"))?;
        writeln!(
            out,
            "{} across {} rule(s)",
            self.paint(
                Color::Red.bold(),
                &format!("Found {} issue(s)", report.total)
            ),
            report.rule_count
        )?;

        for group in &report.categories {
            let color = category_color(group.category);
            let title = format!("{} ({})", group.category, group.total);
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                self.paint(color.bold(), group.category.as_str()),
                self.paint(color.normal(), &format!("({})", group.total))
            )?;
            writeln!(out, "{}", "=".repeat(title.chars().count()))?;
            writeln!(out)?;

            for rule in &group.rules {
                self.write_rule(rule, color, out)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", summary_line(report))?;

        Ok(report.status())
    }

    fn write_rule(&self, rule: &RuleGroup, color: Color, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            " {} {}  {}",
            self.paint(Style::new().bold(), &rule.meta.label),
            self.paint(color.normal(), &format!("({})", rule.count())),
            self.paint(Color::Blue.normal(), &rule.identifier)
        )?;

        let mut table = Table::new();
        table.load_preset(presets::ASCII_FULL_CONDENSED);
        table.force_no_tty();
        table.set_header(vec![
            Cell::new(self.paint(Color::Green.normal(), "Line")),
            Cell::new(self.paint(Color::Green.normal(), "Error")),
        ]);

        let last = rule.count().saturating_sub(1);
        for (idx, item) in rule.items.iter().enumerate() {
            let line = item
                .location
                .line()
                .map_or_else(|| NO_LINE.to_string(), |l| l.to_string());
            table.add_row(vec![Cell::new(line), Cell::new(self.error_cell(item, idx == last))]);
        }

        writeln!(out, "{table}")?;
        writeln!(out)
    }

    /// Location and message of one occurrence, with a trailing blank line
    /// unless it is the last row of its group.
    fn error_cell(&self, item: &Diagnostic, last: bool) -> String {
        let location = self.location(&item.location);
        let mut cell = format!("{location}\n{}", item.message);
        if !last {
            cell.push('\n');
        }
        cell
    }

    fn location(&self, location: &Location) -> String {
        match location {
            Location::File { path, line } => {
                let text = printable(&display_path(path, &self.options.source_root));
                let painted = self.paint(Color::Cyan.normal(), &text);
                match line {
                    Some(line) if self.options.hyperlinks => {
                        let url = deep_link(
                            &self.options.url_template,
                            path,
                            *line,
                            &self.options.source_root,
                        );
                        hyperlink(&url, &painted)
                    }
                    _ => painted,
                }
            }
            Location::Generic => location.file_display(),
        }
    }
}

impl Formatter for StyledReporter {
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()> {
        self.write_report(&Report::build(diagnostics), out).map(|_| ())
    }
}

/// Closing line listing every category total, zeros included.
#[must_use]
pub fn summary_line(report: &Report) -> String {
    let parts: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c, report.category_total(*c)))
        .collect();
    format!("Summary: {}", parts.join(", "))
}
