//! Property tests for classification and aggregation invariants.

use code_scan_core::{classify, Category, Diagnostic, Location, Report};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pderas.disallow.function.eval".to_string()),
        Just("pderas.disallow.exit".to_string()),
        Just("pderas.disallow.debug".to_string()),
        Just("deadCode.unused".to_string()),
        Just("missingType.return".to_string()),
        Just("array.offset".to_string()),
        Just("performance.loop".to_string()),
        Just("pderas.generic".to_string()),
        "[a-z]{1,6}\\.[a-zA-Z]{1,6}",
    ]
}

fn diagnostic() -> impl Strategy<Value = Diagnostic> {
    (identifier(), 1usize..500, any::<bool>()).prop_map(|(id, line, generic)| {
        if generic {
            Diagnostic::generic("not file specific")
        } else {
            Diagnostic::new(id, Location::new("/srv/app/X.php", line), "message")
        }
    })
}

proptest! {
    #[test]
    fn classify_is_total_and_deterministic(id in ".*") {
        let first = classify(&id);
        let second = classify(&id);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn totals_are_consistent(diagnostics in prop::collection::vec(diagnostic(), 0..60)) {
        let report = Report::build(&diagnostics);

        let category_sum: usize = Category::ALL.iter().map(|c| report.category_total(*c)).sum();
        let group_sum: usize = report
            .categories
            .iter()
            .flat_map(|c| c.rules.iter())
            .map(|r| r.count())
            .sum();

        prop_assert_eq!(category_sum, diagnostics.len());
        prop_assert_eq!(group_sum, diagnostics.len());
        prop_assert_eq!(report.total, diagnostics.len());
    }

    #[test]
    fn every_diagnostic_lands_in_its_own_bucket(diagnostics in prop::collection::vec(diagnostic(), 0..60)) {
        let report = Report::build(&diagnostics);
        for group in report.categories.iter().flat_map(|c| c.rules.iter()) {
            for item in &group.items {
                prop_assert_eq!(&item.identifier, &group.identifier);
            }
        }
        let distinct: std::collections::HashSet<&str> =
            diagnostics.iter().map(|d| d.identifier.as_str()).collect();
        prop_assert_eq!(report.rule_count, distinct.len());
    }

    #[test]
    fn categories_and_rules_are_ordered(diagnostics in prop::collection::vec(diagnostic(), 0..60)) {
        let report = Report::build(&diagnostics);

        let cats: Vec<Category> = report.categories.iter().map(|c| c.category).collect();
        let mut sorted = cats.clone();
        sorted.sort();
        prop_assert_eq!(&cats, &sorted);

        for category in &report.categories {
            prop_assert!(category.total > 0);
            for pair in category.rules.windows(2) {
                prop_assert!(pair[0].count() >= pair[1].count());
                if pair[0].count() == pair[1].count() {
                    let first_seen = |id: &str| diagnostics.iter().position(|d| d.identifier == id);
                    prop_assert!(first_seen(&pair[0].identifier) < first_seen(&pair[1].identifier));
                }
            }
        }
    }

    #[test]
    fn building_twice_is_identical(diagnostics in prop::collection::vec(diagnostic(), 0..40)) {
        prop_assert_eq!(Report::build(&diagnostics), Report::build(&diagnostics));
    }
}
