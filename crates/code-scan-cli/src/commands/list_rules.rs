//! List rules command implementation.

use anyhow::Result;
use code_scan::classify::{Pattern, CLASSIFICATIONS};
use code_scan::rules::recommended_rules;
use code_scan::Config;
use std::io::{self, Write};

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = super::load_config(source)?;
    let stdout = io::stdout();
    write_listing(&config, &mut stdout.lock())?;
    Ok(())
}

fn write_listing(config: &Config, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Available rules:\n")?;
    writeln!(
        out,
        "{:<20} {:<28} {:<9} Description",
        "Name", "Identifier", "Enabled"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;

    for rule in recommended_rules(config) {
        let enabled = if config.is_rule_enabled(rule.name()) {
            "yes"
        } else {
            "no"
        };
        writeln!(
            out,
            "{:<20} {:<28} {:<9} {}",
            rule.name(),
            rule.identifier(),
            enabled,
            rule.description()
        )?;
    }

    writeln!(out, "\nBanned functions: {}", config.banned_functions.join(", "))?;
    writeln!(out, "Engine level: {}", config.level)?;

    writeln!(out, "\nClassification (first match wins):\n")?;
    writeln!(out, "{:<44} {:<12} {:<8}", "Identifier", "Category", "Severity")?;
    writeln!(out, "{}", "-".repeat(66))?;
    for entry in CLASSIFICATIONS {
        writeln!(
            out,
            "{:<44} {:<12} {:<8}",
            describe(entry.pattern),
            entry.category,
            entry.severity
        )?;
    }
    writeln!(out, "{:<44} {:<12} {:<8}", "anything else", "General", "warning")
}

fn describe(pattern: Pattern) -> String {
    match pattern {
        Pattern::Prefix(prefixes) => prefixes
            .iter()
            .map(|p| format!("{p}*"))
            .collect::<Vec<_>>()
            .join(", "),
        Pattern::Exact(exact) => exact.to_string(),
    }
}
