//! Grouping of diagnostics into per-rule and per-category buckets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::classify::Classifier;
use crate::types::{Category, Diagnostic, RuleMeta};

/// Process status a report resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStatus {
    /// No diagnostics.
    Clean,
    /// One or more diagnostics.
    IssuesFound,
}

impl ExitStatus {
    /// Numeric process exit code.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::IssuesFound => 1,
        }
    }

    /// Returns true for [`ExitStatus::Clean`].
    #[must_use]
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }
}

/// All occurrences of one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    /// Shared identifier.
    pub identifier: String,
    /// Classification of the identifier.
    pub meta: RuleMeta,
    /// Occurrences in first-seen order.
    pub items: Vec<Diagnostic>,
}

impl RuleGroup {
    /// Number of occurrences.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// All rule groups of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// The category.
    pub category: Category,
    /// Sum of the rule group sizes.
    pub total: usize,
    /// Rule groups by descending count, ties in first-seen order.
    pub rules: Vec<RuleGroup>,
}

/// Aggregated view of one diagnostic batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Non-empty categories in priority order.
    pub categories: Vec<CategoryGroup>,
    /// Total number of diagnostics.
    pub total: usize,
    /// Number of distinct identifiers.
    pub rule_count: usize,
}

impl Report {
    /// Groups, classifies and orders a diagnostic batch.
    #[must_use]
    pub fn build(diagnostics: &[Diagnostic]) -> Self {
        // Identifier buckets in first-seen order.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut by_rule: Vec<(&str, Vec<Diagnostic>)> = Vec::new();
        for d in diagnostics {
            let slot = *index.entry(d.identifier.as_str()).or_insert_with(|| {
                by_rule.push((d.identifier.as_str(), Vec::new()));
                by_rule.len() - 1
            });
            by_rule[slot].1.push(d.clone());
        }

        let rule_count = by_rule.len();
        let mut classifier = Classifier::new();
        let mut buckets: [Vec<RuleGroup>; 4] = Default::default();
        for (identifier, items) in by_rule {
            let meta = classifier.classify(identifier).clone();
            buckets[meta.category.index()].push(RuleGroup {
                identifier: identifier.to_string(),
                meta,
                items,
            });
        }

        let mut categories = Vec::new();
        for (category, mut rules) in Category::ALL.into_iter().zip(buckets) {
            if rules.is_empty() {
                continue;
            }
            // Stable: equal counts keep first-seen order.
            rules.sort_by(|a, b| b.count().cmp(&a.count()));
            let total = rules.iter().map(RuleGroup::count).sum();
            debug!("{}: {} issue(s) in {} rule(s)", category, total, rules.len());
            categories.push(CategoryGroup {
                category,
                total,
                rules,
            });
        }

        let total = categories.iter().map(|c| c.total).sum();

        Self {
            categories,
            total,
            rule_count,
        }
    }

    /// Total for a category, 0 when it has no diagnostics.
    #[must_use]
    pub fn category_total(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.total)
    }

    /// Returns the group for a category, if non-empty.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryGroup> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Returns true if the batch was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Status the report resolves to.
    #[must_use]
    pub fn status(&self) -> ExitStatus {
        if self.is_empty() {
            ExitStatus::Clean
        } else {
            ExitStatus::IssuesFound
        }
    }
}
