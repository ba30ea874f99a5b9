//! # code-scan
//!
//! Disallowed-construct rules and a grouped, severity-ordered diagnostics
//! report for static analysis of PHP projects.
//!
//! This is the main facade crate that re-exports core functionality, rules
//! and renderers, and wires them into a [`Pipeline`].
//!
//! ## Data Flow
//!
//! ```text
//! syntax-tree nodes → rules → diagnostics → classify → aggregate → render
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use code_scan::{Config, Node, Pipeline, Scope};
//! use code_scan::report::{OutputMode, SystemEnvironment};
//!
//! let mut pipeline = Pipeline::new(Config::default());
//! pipeline.scan_file(&Scope::new("/srv/app/X.php"), &[Node::call("eval", 10)]);
//!
//! let diagnostics = pipeline.finish(engine_result);
//! let status = pipeline.report(&diagnostics, OutputMode::Auto, &SystemEnvironment, &mut std::io::stdout())?;
//! std::process::exit(status.code());
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use code_scan_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use code_scan_rules::*;
}

/// Report renderers.
pub mod report {
    pub use code_scan_report::*;
}

mod pipeline;

pub use pipeline::Pipeline;
