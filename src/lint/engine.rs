//! Validation engine
//!
//! Runs every enabled rule of the catalog, in catalog order, against one
//! commit message.

use crate::config::LintConfig;
use crate::lint::catalog;
use crate::lint::header::parse_header;
use crate::lint::patterns::Patterns;
use crate::lint::types::{RuleContext, ValidationResult};
use tracing::{debug, trace};

pub const EMPTY_MESSAGE: &str = "commit message is empty";

/// Stateless apart from its compiled patterns; `validate` is pure.
#[derive(Debug, Clone)]
pub struct Validator {
    patterns: Patterns,
}

impl Validator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self::with_patterns(Patterns::compile()?))
    }

    pub fn with_patterns(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Validate `message` against `config`.
    ///
    /// An empty or whitespace-only message yields a single violation and no
    /// rule runs.
    pub fn validate(&self, message: &str, config: &LintConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if message.trim().is_empty() {
            result.violations.push(EMPTY_MESSAGE.to_string());
            return result;
        }

        let lines: Vec<&str> = message.lines().collect();
        let header = lines.first().copied().unwrap_or_default();
        let context = RuleContext {
            parts: parse_header(header),
            header,
            lines,
            config,
            patterns: &self.patterns,
        };

        for (rule_name, rule_fn) in catalog::rule_checks() {
            if !config.is_rule_enabled(rule_name) {
                trace!(rule = rule_name, "rule disabled");
                continue;
            }
            let rule_result = rule_fn(&context);
            if !rule_result.violations.is_empty() {
                debug!(rule = rule_name, count = rule_result.violations.len(), "rule violated");
            }
            result.absorb(rule_result);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::catalog::{BREAKING_CHANGE, HEADER_FORMAT, TYPE_ENUM};

    fn validator() -> Validator {
        Validator::new().unwrap()
    }

    #[test]
    fn test_valid_message() {
        let result = validator().validate("feat: add new feature", &LintConfig::default());
        assert!(result.is_valid());
        assert!(!result.needs_breaking_change_footer);
    }

    #[test]
    fn test_empty_short_circuit() {
        let v = validator();
        for message in ["", "   \n", "\n\n\t"] {
            let result = v.validate(message, &LintConfig::default());
            assert_eq!(result.violations, vec![EMPTY_MESSAGE]);
            assert!(!result.needs_breaking_change_footer);
        }
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let config = LintConfig {
            disabled_rules: vec![HEADER_FORMAT.to_string(), TYPE_ENUM.to_string()],
            ..LintConfig::default()
        };
        let result = validator().validate("invalid: this is not a valid type", &config);
        assert!(result.is_valid());
    }

    #[test]
    fn test_disabled_breaking_change_rule_clears_flag() {
        let config = LintConfig {
            disabled_rules: vec![BREAKING_CHANGE.to_string()],
            ..LintConfig::default()
        };
        let result = validator().validate("feat!: add breaking change", &config);
        assert!(!result.needs_breaking_change_footer);
    }

    #[test]
    fn test_header_without_separator_does_not_panic() {
        let result = validator().validate("just some words", &LintConfig::default());
        assert!(result.violations.contains(&"Subject must not be empty".to_string()));
    }

    #[test]
    fn test_empty_message_text() {
        let result = validator().validate("", &LintConfig::default());
        assert_eq!(result.violations, vec!["commit message is empty"]);
    }

    #[test]
    fn test_whitespace_description_is_not_an_empty_subject() {
        let result = validator().validate("feat:   ", &LintConfig::default());
        assert!(!result.violations.contains(&"Subject must not be empty".to_string()));

        let result = validator().validate("feat: ", &LintConfig::default());
        assert!(result.violations.contains(&"Subject must not be empty".to_string()));
    }
}
