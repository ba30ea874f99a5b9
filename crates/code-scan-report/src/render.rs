//! Output mode selection and rendering entry point.

use code_scan_core::{Diagnostic, ExitStatus, Report};
use std::io::{self, Write};
use tracing::debug;

use crate::ci::{CiFormat, Environment};
use crate::compact::CompactFormatter;
use crate::github::GithubFormatter;
use crate::json::JsonFormatter;
use crate::styled::{ReportOptions, StyledReporter};
use crate::teamcity::TeamcityFormatter;
use crate::Formatter;

/// How a diagnostic batch is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// CI annotations when a CI system is detected, then the styled report.
    #[default]
    Auto,
    /// Pretty-printed JSON only.
    Json,
    /// One line per diagnostic only.
    Compact,
    /// GitHub Actions annotations only.
    Github,
    /// TeamCity service messages only.
    Teamcity,
}

/// Renders `diagnostics` to `out` and returns the resulting status.
///
/// In [`OutputMode::Auto`] the machine format of a detected CI system is
/// written first, then the styled report. The other modes write only their
/// own format.
///
/// # Errors
///
/// Returns any error raised while writing to `out`.
pub fn render(
    diagnostics: &[Diagnostic],
    mode: OutputMode,
    options: &ReportOptions,
    env: &dyn Environment,
    out: &mut dyn Write,
) -> io::Result<ExitStatus> {
    let report = Report::build(diagnostics);
    debug!(
        "Rendering {} diagnostic(s) in {:?} mode",
        report.total, mode
    );

    match mode {
        OutputMode::Auto => {
            if let Some(ci) = CiFormat::detect(env) {
                ci.formatter().format(diagnostics, out)?;
            }
            StyledReporter::new(options.clone()).write_report(&report, out)?;
        }
        OutputMode::Json => JsonFormatter::write_report(&report, out)?,
        OutputMode::Compact => CompactFormatter.format(diagnostics, out)?,
        OutputMode::Github => GithubFormatter.format(diagnostics, out)?,
        OutputMode::Teamcity => TeamcityFormatter.format(diagnostics, out)?,
    }

    out.flush()?;
    Ok(report.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_scan_core::Location;

    fn no_ci(_: &str) -> Option<String> {
        None
    }

    fn github(key: &str) -> Option<String> {
        (key == "GITHUB_ACTIONS").then(|| "true".to_string())
    }

    fn diagnostics() -> Vec<Diagnostic> {
        vec![Diagnostic::new(
            "pderas.disallow.function.eval",
            Location::new("/app/X.php", 10),
            "Disallowed function eval() used.",
        )]
    }

    fn run(mode: OutputMode, env: &dyn Environment, diagnostics: &[Diagnostic]) -> (String, ExitStatus) {
        let mut out = Vec::new();
        let status = render(diagnostics, mode, &ReportOptions::plain(), env, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), status)
    }

    #[test]
    fn auto_without_ci_is_styled_only() {
        let (text, status) = run(OutputMode::Auto, &no_ci, &diagnostics());
        assert!(!text.contains("::error"));
        assert!(text.contains("Code Scan Results"));
        assert_eq!(status.code(), 1);
    }

    #[test]
    fn auto_in_ci_writes_annotations_first() {
        let (text, _) = run(OutputMode::Auto, &github, &diagnostics());
        assert!(text.starts_with("::error file=/app/X.php,line=10,col=0::"));
        assert!(text.find("::error").unwrap() < text.find("Code Scan Results").unwrap());
    }

    #[test]
    fn explicit_machine_mode_supersedes_styled() {
        let (text, status) = run(OutputMode::Github, &no_ci, &diagnostics());
        assert!(!text.contains("Code Scan Results"));
        assert_eq!(text.lines().count(), 1);
        assert_eq!(status, ExitStatus::IssuesFound);
    }

    #[test]
    fn empty_input_is_clean_in_every_mode() {
        for mode in [
            OutputMode::Auto,
            OutputMode::Json,
            OutputMode::Compact,
            OutputMode::Github,
            OutputMode::Teamcity,
        ] {
            let (_, status) = run(mode, &github, &[]);
            assert_eq!(status, ExitStatus::Clean, "{mode:?}");
        }
        let (text, _) = run(OutputMode::Auto, &no_ci, &[]);
        assert_eq!(text, "[OK] No issues found\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let err = render(
            &diagnostics(),
            OutputMode::Auto,
            &ReportOptions::plain(),
            &no_ci,
            &mut BrokenSink,
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
