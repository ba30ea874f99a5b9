//! Report command implementation.

use anyhow::{Context, Result};
use code_scan::report::{OutputMode, SystemEnvironment};
use code_scan::{parse_node_streams, AnalysisResult, Config, Diagnostic, ExitStatus, Pipeline};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;

/// Options of the report command.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Engine output file, `-` for stdin.
    pub input: PathBuf,
    /// Parser node stream to run the rules over.
    pub nodes: Option<PathBuf>,
    /// Output mode.
    pub mode: OutputMode,
    /// Force plain output.
    pub no_color: bool,
    /// Overrides `report.url_template`.
    pub url_template: Option<String>,
    /// Overrides `report.source_root`.
    pub source_root: Option<String>,
}

/// Runs the report command.
pub fn run(args: &ReportArgs, source: &ConfigSource) -> Result<ExitStatus> {
    let mut config = super::load_config(source)?;
    if let Some(template) = &args.url_template {
        config.report.url_template.clone_from(template);
    }
    if let Some(root) = &args.source_root {
        config.report.source_root.clone_from(root);
    }

    let styled = use_styling(args.no_color);
    let (pipeline, diagnostics) = collect(args, config)?;
    let pipeline = pipeline.styling(styled, styled);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = pipeline
        .report(&diagnostics, args.mode, &SystemEnvironment, &mut out)
        .context("Failed to write report")?;
    Ok(status)
}

/// Runs the rules over the node stream, if any, and merges the result with
/// the engine's findings.
fn collect(args: &ReportArgs, config: Config) -> Result<(Pipeline, Vec<Diagnostic>)> {
    let mut pipeline = Pipeline::new(config);

    if let Some(path) = &args.nodes {
        let raw = read_input(path)?;
        let streams = parse_node_streams(&raw)
            .with_context(|| format!("Failed to read node stream from {}", path.display()))?;
        let found = pipeline.scan_streams(&streams);
        tracing::debug!("Rules reported {} finding(s) in {} file(s)", found, streams.len());
    }

    let raw = read_input(&args.input)?;
    let result = AnalysisResult::from_engine_json(&raw)
        .with_context(|| format!("Failed to read engine output from {}", args.input.display()))?;
    tracing::debug!(
        "Engine reported {} file finding(s) and {} generic message(s)",
        result.file_errors.len(),
        result.generic_errors.len()
    );

    let diagnostics = pipeline.finish(result);
    Ok((pipeline, diagnostics))
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn use_styling(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}
