//! Mapping from diagnostic identifiers to category, severity and label.
//!
//! Classification is an ordered table of patterns evaluated first match
//! wins, with a fallback to [`Category::General`] labelled by the identifier
//! itself. It never fails.

use std::collections::HashMap;

use crate::types::{Category, RuleMeta, Severity};

/// Identifier prefix used by the banned-function rule.
pub const FUNCTION_PREFIX: &str = "pderas.disallow.function.";

/// Identifier used by the exit/die rule.
pub const EXIT_IDENTIFIER: &str = "pderas.disallow.exit";

/// Identifier used by the debug-helper rule.
pub const DEBUG_IDENTIFIER: &str = "pderas.disallow.debug";

/// How an entry matches an identifier.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// The identifier starts with any of these prefixes.
    Prefix(&'static [&'static str]),
    /// The identifier equals this string.
    Exact(&'static str),
}

impl Pattern {
    fn matches(self, identifier: &str) -> bool {
        match self {
            Self::Prefix(prefixes) => prefixes.iter().any(|p| identifier.starts_with(p)),
            Self::Exact(exact) => identifier == exact,
        }
    }
}

/// How an entry derives its label.
#[derive(Debug, Clone, Copy)]
pub enum LabelSource {
    /// A fixed label.
    Fixed(&'static str),
    /// `Banned function <suffix>()`, suffix taken after [`FUNCTION_PREFIX`].
    BannedFunction,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    /// What the row matches.
    pub pattern: Pattern,
    /// Category assigned on match.
    pub category: Category,
    /// Severity assigned on match.
    pub severity: Severity,
    /// Label assigned on match.
    pub label: LabelSource,
}

impl Classification {
    fn build(&self, identifier: &str) -> RuleMeta {
        let label = match self.label {
            LabelSource::Fixed(label) => label.to_string(),
            LabelSource::BannedFunction => {
                let name = identifier.strip_prefix(FUNCTION_PREFIX).unwrap_or(identifier);
                format!("Banned function {name}()")
            }
        };
        RuleMeta::new(self.category, self.severity, label)
    }
}

/// The classification table, in evaluation order.
///
/// `property.`, `array.` and `arguments.` share the "Deprecated usage" label
/// with `deprecated.`.
pub const CLASSIFICATIONS: &[Classification] = &[
    Classification {
        pattern: Pattern::Prefix(&[FUNCTION_PREFIX]),
        category: Category::Security,
        severity: Severity::Error,
        label: LabelSource::BannedFunction,
    },
    Classification {
        pattern: Pattern::Exact(EXIT_IDENTIFIER),
        category: Category::Security,
        severity: Severity::Error,
        label: LabelSource::Fixed("Disallowed exit/die"),
    },
    Classification {
        pattern: Pattern::Exact(DEBUG_IDENTIFIER),
        category: Category::Security,
        severity: Severity::Error,
        label: LabelSource::Fixed("Disallowed debug helper"),
    },
    Classification {
        pattern: Pattern::Prefix(&["missingType.", "phpstan.missingType."]),
        category: Category::Reliability,
        severity: Severity::Warning,
        label: LabelSource::Fixed("Missing type"),
    },
    Classification {
        pattern: Pattern::Prefix(&["deadCode."]),
        category: Category::Reliability,
        severity: Severity::Warning,
        label: LabelSource::Fixed("Dead code"),
    },
    Classification {
        pattern: Pattern::Prefix(&["deprecated."]),
        category: Category::Reliability,
        severity: Severity::Warning,
        label: LabelSource::Fixed("Deprecated usage"),
    },
    Classification {
        pattern: Pattern::Prefix(&["property.", "array.", "arguments."]),
        category: Category::Reliability,
        severity: Severity::Warning,
        label: LabelSource::Fixed("Deprecated usage"),
    },
    Classification {
        pattern: Pattern::Prefix(&["performance."]),
        category: Category::Performance,
        severity: Severity::Warning,
        label: LabelSource::Fixed("Performance issue"),
    },
];

/// Classifies an identifier.
#[must_use]
pub fn classify(identifier: &str) -> RuleMeta {
    CLASSIFICATIONS
        .iter()
        .find(|c| c.pattern.matches(identifier))
        .map_or_else(
            || RuleMeta::new(Category::General, Severity::Warning, identifier),
            |c| c.build(identifier),
        )
}

/// Memoising classifier scoped to one report.
#[derive(Debug, Default)]
pub struct Classifier {
    cache: HashMap<String, RuleMeta>,
}

impl Classifier {
    /// Creates an empty classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies an identifier, computing it at most once.
    pub fn classify(&mut self, identifier: &str) -> &RuleMeta {
        self.cache
            .entry(identifier.to_string())
            .or_insert_with(|| classify(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(identifier: &str) -> (Category, Severity, String) {
        let m = classify(identifier);
        (m.category, m.severity, m.label)
    }

    #[test]
    fn banned_function_label_uses_suffix() {
        assert_eq!(
            meta("pderas.disallow.function.eval"),
            (
                Category::Security,
                Severity::Error,
                "Banned function eval()".to_string()
            )
        );
        assert_eq!(
            classify("pderas.disallow.function.function").label,
            "Banned function function()"
        );
    }

    #[test]
    fn exact_security_identifiers() {
        assert_eq!(classify(EXIT_IDENTIFIER).label, "Disallowed exit/die");
        assert_eq!(classify(DEBUG_IDENTIFIER).label, "Disallowed debug helper");
        assert_eq!(classify(DEBUG_IDENTIFIER).category, Category::Security);
        // Exact match only.
        assert_eq!(classify("pderas.disallow.exit.extra").category, Category::General);
    }

    #[test]
    fn reliability_prefixes() {
        assert_eq!(classify("missingType.return").label, "Missing type");
        assert_eq!(classify("phpstan.missingType.iterableValue").label, "Missing type");
        assert_eq!(classify("deadCode.unreachable").label, "Dead code");
        assert_eq!(classify("deprecated.method").label, "Deprecated usage");
        for id in ["property.notFound", "array.offset", "arguments.count"] {
            let m = classify(id);
            assert_eq!(m.category, Category::Reliability, "{id}");
            assert_eq!(m.severity, Severity::Warning, "{id}");
            assert_eq!(m.label, "Deprecated usage", "{id}");
        }
    }

    #[test]
    fn performance_prefix() {
        assert_eq!(
            meta("performance.nPlusOne"),
            (
                Category::Performance,
                Severity::Warning,
                "Performance issue".to_string()
            )
        );
    }

    #[test]
    fn unknown_falls_back_to_general() {
        assert_eq!(
            meta("method.notFound"),
            (
                Category::General,
                Severity::Warning,
                "method.notFound".to_string()
            )
        );
        assert_eq!(classify("").category, Category::General);
        assert_eq!(classify("pderas.generic").label, "pderas.generic");
    }

    #[test]
    fn classifier_memoises_same_result() {
        let mut classifier = Classifier::new();
        let first = classifier.classify("deadCode.x").clone();
        let second = classifier.classify("deadCode.x").clone();
        assert_eq!(first, second);
        assert_eq!(first, classify("deadCode.x"));
    }
}
