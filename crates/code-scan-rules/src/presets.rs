//! The rule set a scan runs with.

use crate::{DisallowDebugHelpers, DisallowExit, DisallowFunctionCalls};
use code_scan_core::{Config, RuleBox};

/// Returns the recommended set of rules.
///
/// Includes:
/// - `disallow-function` with `banned_functions` from the config
/// - `disallow-exit`
/// - `disallow-debug`
#[must_use]
pub fn recommended_rules(config: &Config) -> Vec<RuleBox> {
    vec![
        Box::new(DisallowFunctionCalls::new(&config.banned_functions)),
        Box::new(DisallowExit::new()),
        Box::new(DisallowDebugHelpers::new()),
    ]
}
