//! # code-scan-report
//!
//! Renderers for code-scan diagnostics.
//!
//! - [`StyledReporter`]: grouped terminal report with tables and deep links
//! - [`GithubFormatter`], [`TeamcityFormatter`]: CI annotation formats,
//!   selected automatically by [`CiFormat::detect`]
//! - [`JsonFormatter`], [`CompactFormatter`]: machine-readable output
//!
//! [`render`] picks the formatters for an [`OutputMode`] and returns the
//! status the process should exit with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use code_scan_core::Diagnostic;
use std::io::{self, Write};

mod ci;
mod compact;
mod github;
mod json;
mod render;
mod styled;
mod teamcity;

/// Deep-link helpers.
pub mod link;

pub use ci::{CiFormat, Environment, SystemEnvironment};
pub use compact::CompactFormatter;
pub use github::{annotation, GithubFormatter};
pub use json::JsonFormatter;
pub use render::{render, OutputMode};
pub use styled::{summary_line, ReportOptions, StyledReporter, NO_ISSUES, NO_LINE};
pub use teamcity::TeamcityFormatter;

/// Writes a diagnostic batch in one output format.
pub trait Formatter {
    /// Renders `diagnostics` to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sink.
    fn format(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> io::Result<()>;
}
