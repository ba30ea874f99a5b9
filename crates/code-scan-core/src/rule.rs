//! Rule trait for defining matchers over syntax-tree nodes.

use crate::context::Scope;
use crate::node::{Node, NodeKind};
use crate::types::Diagnostic;

/// A matcher over one kind of syntax-tree node.
///
/// The registry only hands a rule nodes of the kind it declares. A rule that
/// cannot interpret a node returns no diagnostics rather than failing.
///
/// # Example
///
/// ```ignore
/// use code_scan_core::{Diagnostic, Node, NodeKind, Rule, Scope};
///
/// pub struct NoEval;
///
/// impl Rule for NoEval {
///     fn name(&self) -> &'static str { "no-eval" }
///     fn identifier(&self) -> &'static str { "acme.no.eval" }
///     fn node_kind(&self) -> NodeKind { NodeKind::FuncCall }
///
///     fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
///         match node {
///             Node::FuncCall { target, line } if target.as_name() == Some("eval") => {
///                 vec![Diagnostic::new(self.identifier(), scope.location(*line), "eval")]
///             }
///             _ => Vec::new(),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "disallow-exit").
    fn name(&self) -> &'static str;

    /// Returns the identifier namespace this rule reports under.
    fn identifier(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// The node kind this rule wants to see.
    fn node_kind(&self) -> NodeKind;

    /// Checks a single node and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `node` - A node of the kind returned by [`Rule::node_kind`]
    /// * `scope` - The file the node belongs to
    fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn identifier(&self) -> &'static str {
            "test.rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn node_kind(&self) -> NodeKind {
            NodeKind::Exit
        }

        fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.identifier(),
                scope.location(node.line()),
                "Test diagnostic",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.identifier(), "test.rule");
        assert_eq!(rule.description(), "A test rule");

        let found = rule.check(&Node::exit(9), &Scope::new("a.php"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.line(), Some(9));
    }
}
