//! Rule to forbid `exit` / `die` expressions.
//!
//! Terminating the process from application code skips the framework's
//! response handling. Every exit expression is reported, with or without a
//! status argument.

use code_scan_core::classify::EXIT_IDENTIFIER;
use code_scan_core::{Diagnostic, Node, NodeKind, Rule, Scope};

/// Rule name for disallow-exit.
pub const NAME: &str = "disallow-exit";

/// Forbids `exit` and `die`.
#[derive(Debug, Clone, Default)]
pub struct DisallowExit;

impl DisallowExit {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DisallowExit {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identifier(&self) -> &'static str {
        EXIT_IDENTIFIER
    }

    fn description(&self) -> &'static str {
        "Forbids exit/die expressions"
    }

    fn node_kind(&self) -> NodeKind {
        NodeKind::Exit
    }

    fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
        match node {
            Node::Exit { line, .. } => vec![Diagnostic::new(
                EXIT_IDENTIFIER,
                scope.location(*line),
                "Disallowed exit/die usage.",
            )],
            Node::FuncCall { .. } => Vec::new(),
        }
    }
}
