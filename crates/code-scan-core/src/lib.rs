//! # code-scan-core
//!
//! Core framework for code scans over an externally parsed syntax tree.
//!
//! This crate provides the foundational traits and types of the scan
//! pipeline. It includes:
//!
//! - [`Rule`] trait for matchers over one [`NodeKind`]
//! - [`Registry`] for dispatching nodes to the rules interested in them
//! - [`AnalysisResult`] for ingesting the external engine's findings
//! - [`classify`] for mapping identifiers to a [`RuleMeta`]
//! - [`Report`] for grouping diagnostics by rule and category
//!
//! ## Example
//!
//! ```ignore
//! use code_scan_core::{Node, Registry, Report, Scope};
//!
//! let registry = Registry::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let diagnostics = registry.analyze_file(&Scope::new("app/X.php"), &nodes);
//! let report = Report::build(&diagnostics);
//! std::process::exit(report.status().code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod config;
mod context;
mod ingest;
mod node;
mod registry;
mod rule;
mod types;

/// Identifier classification.
pub mod classify;

pub use aggregate::{CategoryGroup, ExitStatus, Report, RuleGroup};
pub use classify::{classify, Classifier};
pub use config::{Config, ConfigError, ReportConfig, RuleConfig};
pub use config::{DEFAULT_BANNED_FUNCTIONS, DEFAULT_LEVEL, DEFAULT_SOURCE_ROOT, DEFAULT_URL_TEMPLATE};
pub use context::Scope;
pub use ingest::{parse_node_streams, AnalysisResult, FileFinding, FileNodes, IngestError};
pub use node::{CallTarget, ExitKind, Node, NodeKind};
pub use registry::{Registry, RegistryBuilder};
pub use rule::{Rule, RuleBox};
pub use types::{Category, Diagnostic, Location, RuleMeta, Severity, GENERIC_FILE, GENERIC_IDENTIFIER};
