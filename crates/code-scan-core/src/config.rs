//! Configuration types for code-scan.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Deep-link template used when none is configured.
pub const DEFAULT_URL_TEMPLATE: &str = "vscode://file/%file%:%line%";

/// Source-root marker used to shorten displayed paths.
pub const DEFAULT_SOURCE_ROOT: &str = "app/";

/// Analysis strictness handed to the engine when none is configured.
pub const DEFAULT_LEVEL: u8 = 5;

/// Functions banned when no list is configured.
pub const DEFAULT_BANNED_FUNCTIONS: &[&str] = &[
    "eval",
    "exec",
    "shell_exec",
    "system",
    "passthru",
    "proc_open",
    "popen",
    "pcntl_exec",
];

/// Top-level configuration for code-scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Strictness level of the external analysis engine.
    ///
    /// The rules do not read it. It is kept so one file configures both the
    /// engine run and the report, and `list-rules` shows it.
    #[serde(default = "default_level")]
    pub level: u8,

    /// Function names the banned-function rule reports (case-insensitive).
    #[serde(default = "default_banned_functions")]
    pub banned_functions: Vec<String>,

    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: default_level(),
            banned_functions: default_banned_functions(),
            report: ReportConfig::default(),
            rules: HashMap::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Deep-link template. `%file%`, `%relFile%` and `%line%` are substituted.
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Marker the displayed path is truncated to start at.
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            source_root: default_source_root(),
        }
    }
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

fn default_banned_functions() -> Vec<String> {
    DEFAULT_BANNED_FUNCTIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(code_scan::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(code_scan::config::parse),
        help("check the TOML syntax and the key names in code-scan.toml")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}
