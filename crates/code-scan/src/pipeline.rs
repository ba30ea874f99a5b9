//! End-to-end scan pipeline.

use code_scan_core::{
    AnalysisResult, Config, Diagnostic, ExitStatus, FileNodes, Node, Registry, Scope,
};
use code_scan_report::{render, Environment, OutputMode, ReportOptions};
use code_scan_rules::recommended_rules;
use std::io::{self, Write};
use tracing::info;

/// Runs the rules over parsed files and renders the merged result.
///
/// Diagnostics from the rules come first, followed by the engine's own
/// file-scoped findings and then its generic messages.
pub struct Pipeline {
    registry: Registry,
    options: ReportOptions,
    collected: Vec<Diagnostic>,
    files_scanned: usize,
}

impl Pipeline {
    /// Creates a pipeline with the recommended rules.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let rules = recommended_rules(&config);
        let options = ReportOptions::from(&config.report);
        let registry = Registry::builder().config(config).rules(rules).build();
        Self {
            registry,
            options,
            collected: Vec::new(),
            files_scanned: 0,
        }
    }

    /// Overrides colour and hyperlink output.
    #[must_use]
    pub fn styling(mut self, color: bool, hyperlinks: bool) -> Self {
        self.options.color = color;
        self.options.hyperlinks = hyperlinks;
        self
    }

    /// Returns the rule registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the rules over the nodes of one file.
    ///
    /// Returns the number of diagnostics found in this file.
    pub fn scan_file(&mut self, scope: &Scope, nodes: &[Node]) -> usize {
        let found = self.registry.analyze_file(scope, nodes);
        let count = found.len();
        self.collected.extend(found);
        self.files_scanned += 1;
        count
    }

    /// Runs the rules over every file of a node stream, in stream order.
    ///
    /// Returns the number of diagnostics found.
    pub fn scan_streams(&mut self, files: &[FileNodes]) -> usize {
        files
            .iter()
            .map(|file| self.scan_file(&file.scope, &file.nodes))
            .sum()
    }

    /// Merges rule output with the engine's findings into one batch.
    #[must_use]
    pub fn finish(&mut self, external: AnalysisResult) -> Vec<Diagnostic> {
        let mut merged = AnalysisResult::new();
        merged.push_diagnostics(std::mem::take(&mut self.collected));
        merged.file_errors.extend(external.file_errors);
        merged.generic_errors.extend(external.generic_errors);

        info!(
            "Scanned {} file(s): {} finding(s) in total",
            self.files_scanned,
            merged.len()
        );
        merged.into_diagnostics()
    }

    /// Renders a batch with the configured report options.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `out`.
    pub fn report(
        &self,
        diagnostics: &[Diagnostic],
        mode: OutputMode,
        env: &dyn Environment,
        out: &mut dyn Write,
    ) -> io::Result<ExitStatus> {
        render(diagnostics, mode, &self.options, env, out)
    }
}
