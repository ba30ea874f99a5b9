//! Rule to forbid calls to configured function names.
//!
//! # Rationale
//!
//! Some functions (`eval`, `exec`, `shell_exec`, ...) should never ship. The
//! list comes from configuration and is matched case-insensitively.
//!
//! # Detected Patterns
//!
//! - `eval($code)`, `EVAL($code)`, `\eval($code)`
//!
//! # Not Detected
//!
//! - Dynamic callees such as `$fn($code)`. Only simple names are matched, so
//!   a reported call is always a real banned call.
//!
//! # Identifier
//!
//! `pderas.disallow.function.<name>`, where `<name>` is the lower-cased
//! function name reduced to `[a-z0-9.]`. Names that reduce to nothing usable
//! report under `pderas.disallow.function.function`.

use code_scan_core::classify::FUNCTION_PREFIX;
use code_scan_core::{Diagnostic, Node, NodeKind, Rule, Scope};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Rule name for disallow-function.
pub const NAME: &str = "disallow-function";

/// Segment used when a name cannot form a valid identifier.
pub const FALLBACK_SEGMENT: &str = "function";

static NOT_IDENTIFIER_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9.]").unwrap_or_else(|e| unreachable!("invalid regex: {e}"))
});

static VALID_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9.]*[A-Za-z0-9])?$")
        .unwrap_or_else(|e| unreachable!("invalid regex: {e}"))
});

/// Forbids calls to a configured set of functions.
#[derive(Debug, Clone)]
pub struct DisallowFunctionCalls {
    /// Lower-cased banned names.
    disallowed: HashSet<String>,
}

impl Default for DisallowFunctionCalls {
    fn default() -> Self {
        Self::new(code_scan_core::DEFAULT_BANNED_FUNCTIONS)
    }
}

impl DisallowFunctionCalls {
    /// Creates a rule banning the given names (case-insensitive).
    #[must_use]
    pub fn new<I, S>(functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let disallowed: HashSet<String> = functions
            .into_iter()
            .map(|f| normalize(f.as_ref()))
            .collect();
        debug!("{NAME}: {} banned function(s)", disallowed.len());
        Self { disallowed }
    }

    /// Returns true if `name` is banned.
    #[must_use]
    pub fn is_disallowed(&self, name: &str) -> bool {
        self.disallowed.contains(&normalize(name))
    }
}

/// Lower-cases a name and drops a leading namespace separator.
fn normalize(name: &str) -> String {
    name.trim_start_matches('\\').to_lowercase()
}

/// Builds the identifier reported for a banned function name.
#[must_use]
pub fn identifier_for(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NOT_IDENTIFIER_CHAR.replace_all(&lowered, "");
    let segment = if VALID_SEGMENT.is_match(&stripped) {
        &*stripped
    } else {
        FALLBACK_SEGMENT
    };
    format!("{FUNCTION_PREFIX}{segment}")
}

impl Rule for DisallowFunctionCalls {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identifier(&self) -> &'static str {
        "pderas.disallow.function"
    }

    fn description(&self) -> &'static str {
        "Forbids calls to configured banned functions"
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

        let name = normalize(name);
        if !self.disallowed.contains(&name) {
            return Vec::new();
        }

        vec![Diagnostic::new(
            identifier_for(&name),
            scope.location(*line),
            format!("Disallowed function {name}() used."),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &DisallowFunctionCalls, node: &Node) -> Vec<Diagnostic> {
        rule.check(node, &Scope::new("/app/X.php"))
    }

    #[test]
    fn test_detects_banned_call() {
        let rule = DisallowFunctionCalls::new(["eval"]);
        let found = check(&rule, &Node::call("eval", 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "pderas.disallow.function.eval");
        assert_eq!(found[0].message, "Disallowed function eval() used.");
        assert_eq!(found[0].location.line(), Some(10));
    }

    #[test]
    fn test_matches_case_insensitively() {
        let rule = DisallowFunctionCalls::new(["Shell_Exec"]);
        let found = check(&rule, &Node::call("SHELL_EXEC", 2));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "pderas.disallow.function.shellexec");
        assert_eq!(found[0].message, "Disallowed function shell_exec() used.");
    }

    #[test]
    fn test_matches_fully_qualified_name() {
        let rule = DisallowFunctionCalls::new(["exec"]);
        assert_eq!(check(&rule, &Node::call("\\exec", 1)).len(), 1);
    }

    #[test]
    fn test_ignores_other_calls() {
        let rule = DisallowFunctionCalls::new(["eval"]);
        assert!(check(&rule, &Node::call("evaluate", 1)).is_empty());
        assert!(check(&rule, &Node::exit(1)).is_empty());
    }

    #[test]
    fn test_ignores_dynamic_callee() {
        let rule = DisallowFunctionCalls::new(["eval"]);
        assert!(check(&rule, &Node::dynamic_call(4)).is_empty());
    }

    #[test]
    fn test_symbol_only_name_falls_back() {
        assert_eq!(identifier_for("@@@"), "pderas.disallow.function.function");
        let rule = DisallowFunctionCalls::new(["@@@"]);
        let found = check(&rule, &Node::call("@@@", 1));
        assert_eq!(found[0].identifier, "pderas.disallow.function.function");
    }

    #[test]
    fn test_identifier_sanitization() {
        assert_eq!(identifier_for("var_dump"), "pderas.disallow.function.vardump");
        assert_eq!(identifier_for("App\\Helpers\\Run"), "pderas.disallow.function.apphelpersrun");
        assert_eq!(identifier_for("a.b"), "pderas.disallow.function.a.b");
        // Must start and end with an alphanumeric.
        assert_eq!(identifier_for(".x"), "pderas.disallow.function.function");
        assert_eq!(identifier_for("x."), "pderas.disallow.function.function");
        assert_eq!(identifier_for("_"), "pderas.disallow.function.function");
    }

    #[test]
    fn test_default_list() {
        let rule = DisallowFunctionCalls::default();
        assert!(rule.is_disallowed("eval"));
        assert!(rule.is_disallowed("PASSTHRU"));
        assert!(!rule.is_disallowed("strlen"));
    }
}
