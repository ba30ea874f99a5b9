//! Rule to catch debug helpers left in code.
//!
//! `dd()` and `dump()` are handy while developing and should never reach a
//! commit.

use code_scan_core::classify::DEBUG_IDENTIFIER;
use code_scan_core::{Diagnostic, Node, NodeKind, Rule, Scope};

/// Rule name for disallow-debug.
pub const NAME: &str = "disallow-debug";

/// Debug helper names, lower-cased.
pub const DEBUG_HELPERS: &[&str] = &["dd", "dump"];

/// Forbids debug dump helpers.
#[derive(Debug, Clone, Default)]
pub struct DisallowDebugHelpers;

impl DisallowDebugHelpers {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DisallowDebugHelpers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identifier(&self) -> &'static str {
        DEBUG_IDENTIFIER
    }

    fn description(&self) -> &'static str {
        "Forbids leftover debug helpers (dd, dump)"
    }

    fn node_kind(&self) -> NodeKind {
        NodeKind::FuncCall
    }

    fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
        let Node::FuncCall { target, line } = node else {
            return Vec::new();
        };
        let Some(name) = target.as_name() else {
            return Vec::new();
        };

        let name = name.trim_start_matches('\\').to_lowercase();
        if !DEBUG_HELPERS.contains(&name.as_str()) {
            return Vec::new();
        }

        vec![Diagnostic::new(
            DEBUG_IDENTIFIER,
            scope.location(*line),
            format!("Disallowed debug helper {name}() used."),
        )]
    }
}
