//! Rule registry dispatching syntax-tree nodes to interested rules.

use crate::config::Config;
use crate::context::Scope;
use crate::node::{Node, NodeKind};
use crate::rule::{Rule, RuleBox};
use crate::types::Diagnostic;

use std::collections::BTreeMap;
use tracing::{debug, info};

/// Builder for configuring a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl RegistryBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the registry.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the registry.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the registry.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration used to disable rules.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the registry, dropping rules the configuration disables.
    #[must_use]
    pub fn build(self) -> Registry {
        let config = self.config.unwrap_or_default();
        let mut by_kind: BTreeMap<NodeKind, Vec<RuleBox>> = BTreeMap::new();

        for rule in self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            by_kind.entry(rule.node_kind()).or_default().push(rule);
        }

        Registry { by_kind }
    }
}

/// Holds the configured rules, bucketed by the node kind they inspect.
///
/// Use [`Registry::builder()`] to construct an instance.
pub struct Registry {
    by_kind: BTreeMap<NodeKind, Vec<RuleBox>>,
}

impl Registry {
    /// Creates a new builder for configuring a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    /// Iterates over all registered rules.
    pub fn rules(&self) -> impl Iterator<Item = &RuleBox> {
        self.by_kind.values().flatten()
    }

    /// Returns the rules registered for a node kind, in registration order.
    #[must_use]
    pub fn rules_for(&self, kind: NodeKind) -> &[RuleBox] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Runs every rule interested in `node` and concatenates their output.
    #[must_use]
    pub fn dispatch(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in self.rules_for(node.kind()) {
            let found = rule.check(node, scope);
            if !found.is_empty() {
                debug!(
                    "{} reported {} diagnostic(s) at {}:{}",
                    rule.name(),
                    found.len(),
                    scope.path().display(),
                    node.line()
                );
            }
            diagnostics.extend(found);
        }
        diagnostics
    }

    /// Dispatches every node of one file, in order.
    pub fn analyze_file<'a, I>(&self, scope: &Scope, nodes: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut diagnostics = Vec::new();
        let mut visited = 0usize;
        for node in nodes {
            visited += 1;
            diagnostics.extend(self.dispatch(node, scope));
        }

        info!(
            "Analyzed {} node(s) in {}: {} diagnostic(s)",
            visited,
            scope.path().display(),
            diagnostics.len()
        );

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;

    struct ExitRule;

    impl Rule for ExitRule {
        fn name(&self) -> &'static str {
            "exit-rule"
        }
        fn identifier(&self) -> &'static str {
            "test.exit"
        }
        fn node_kind(&self) -> NodeKind {
            NodeKind::Exit
        }
        fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.identifier(),
                scope.location(node.line()),
                "exit",
            )]
        }
    }

    struct CallRule(&'static str);

    impl Rule for CallRule {
        fn name(&self) -> &'static str {
            self.0
        }
        fn identifier(&self) -> &'static str {
            self.0
        }
        fn node_kind(&self) -> NodeKind {
            NodeKind::FuncCall
        }
        fn check(&self, node: &Node, scope: &Scope) -> Vec<Diagnostic> {
            vec![Diagnostic::new(self.0, scope.location(node.line()), "call")]
        }
    }

    #[test]
    fn dispatches_only_to_matching_kind() {
        let registry = Registry::builder()
            .rule(ExitRule)
            .rule(CallRule("first"))
            .build();
        let scope = Scope::new("a.php");

        let found = registry.dispatch(&Node::exit(3), &scope);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "test.exit");

        let found = registry.dispatch(&Node::call("foo", 4), &scope);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "first");
    }

    #[test]
    fn preserves_registration_order_within_kind() {
        let registry = Registry::builder()
            .rule(CallRule("first"))
            .rule(ExitRule)
            .rule(CallRule("second"))
            .build();

        let found = registry.dispatch(&Node::call("foo", 1), &Scope::new("a.php"));
        let ids: Vec<&str> = found.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
        assert_eq!(registry.rule_count(), 3);
    }

    #[test]
    fn analyze_file_keeps_node_order() {
        let registry = Registry::builder()
            .rule(ExitRule)
            .rule(CallRule("call"))
            .build();
        let nodes = [Node::exit(1), Node::call("x", 2), Node::exit(3)];

        let found = registry.analyze_file(&Scope::new("a.php"), &nodes);
        let lines: Vec<Option<usize>> = found.iter().map(|d| d.location.line()).collect();
        assert_eq!(lines, [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn disabled_rules_are_not_registered() {
        let mut config = Config::default();
        config.rules.insert(
            "exit-rule".to_string(),
            RuleConfig {
                enabled: Some(false),
            },
        );
        let registry = Registry::builder().config(config).rule(ExitRule).build();

        assert_eq!(registry.rule_count(), 0);
        assert!(registry
            .dispatch(&Node::exit(1), &Scope::new("a.php"))
            .is_empty());
    }
}
