//! code-scan CLI tool.
//!
//! Usage:
//! ```bash
//! phpstan analyse --error-format=json | code-scan report
//! code-scan report --nodes nodes.json [OPTIONS] [INPUT]
//! code-scan list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use code_scan::report::OutputMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Grouped, colourised reports for static-analysis findings
#[derive(Parser)]
#[command(name = "code-scan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the engine's JSON output as a report
    Report {
        /// Engine output file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Parser node stream (`{"<path>": [node, ...]}`) to run the rules over
        #[arg(short, long)]
        nodes: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "styled")]
        format: ReportFormat,

        /// Disable colours and hyperlinks
        #[arg(long)]
        no_color: bool,

        /// Editor link template (`%file%`, `%relFile%`, `%line%`)
        #[arg(long)]
        url_template: Option<String>,

        /// Marker where displayed paths start
        #[arg(long)]
        source_root: Option<String>,
    },

    /// List available rules and classifications
    ListRules,
}

/// Output format for the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Styled terminal report, preceded by CI annotations when detected.
    #[default]
    Styled,
    /// JSON document.
    Json,
    /// One line per finding.
    Compact,
    /// GitHub Actions workflow commands only.
    Github,
    /// TeamCity service messages only.
    Teamcity,
}

impl From<ReportFormat> for OutputMode {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Styled => Self::Auto,
            ReportFormat::Json => Self::Json,
            ReportFormat::Compact => Self::Compact,
            ReportFormat::Github => Self::Github,
            ReportFormat::Teamcity => Self::Teamcity,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let source = config_resolver::resolve(&cwd, cli.config.as_deref());

    match cli.command {
        Commands::Report {
            input,
            nodes,
            format,
            no_color,
            url_template,
            source_root,
        } => {
            let args = commands::report::ReportArgs {
                input,
                nodes,
                mode: format.into(),
                no_color,
                url_template,
                source_root,
            };
            let status = commands::report::run(&args, &source)?;
            std::process::exit(status.code());
        }
        Commands::ListRules => commands::list_rules::run(&source),
    }
}
