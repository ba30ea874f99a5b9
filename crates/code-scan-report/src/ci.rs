//! CI environment detection.
//!
//! The machine format is chosen once per invocation from an environment
//! lookup. The lookup is a trait so callers can supply something other than
//! the process environment.

use tracing::debug;

use crate::github::GithubFormatter;
use crate::teamcity::TeamcityFormatter;
use crate::Formatter;

/// Source of environment variables.
pub trait Environment {
    /// Returns the value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> Environment for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// A CI system with its own annotation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiFormat {
    /// GitHub Actions workflow commands.
    Github,
    /// TeamCity service messages.
    Teamcity,
}

impl CiFormat {
    /// Detects the CI system from the environment.
    #[must_use]
    pub fn detect(env: &dyn Environment) -> Option<Self> {
        let detected = if env.var("GITHUB_ACTIONS").as_deref() == Some("true") {
            Some(Self::Github)
        } else if env.var("TEAMCITY_VERSION").is_some_and(|v| !v.is_empty()) {
            Some(Self::Teamcity)
        } else {
            None
        };
        debug!("Detected CI format: {:?}", detected);
        detected
    }

    /// Returns the formatter for this CI system.
    #[must_use]
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            Self::Github => Box::new(GithubFormatter),
            Self::Teamcity => Box::new(TeamcityFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn detects_github_actions() {
        assert_eq!(
            CiFormat::detect(&env(&[("GITHUB_ACTIONS", "true")])),
            Some(CiFormat::Github)
        );
        assert_eq!(CiFormat::detect(&env(&[("GITHUB_ACTIONS", "false")])), None);
    }

    #[test]
    fn detects_teamcity() {
        assert_eq!(
            CiFormat::detect(&env(&[("TEAMCITY_VERSION", "2024.1")])),
            Some(CiFormat::Teamcity)
        );
    }

    #[test]
    fn github_wins_over_teamcity() {
        assert_eq!(
            CiFormat::detect(&env(&[
                ("TEAMCITY_VERSION", "2024.1"),
                ("GITHUB_ACTIONS", "true")
            ])),
            Some(CiFormat::Github)
        );
    }

    #[test]
    fn no_ci_detected() {
        assert_eq!(CiFormat::detect(&env(&[])), None);
    }
}
