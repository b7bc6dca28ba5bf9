//! Core types for commit message validation

use crate::config::LintConfig;
use crate::lint::header::HeaderParts;
use crate::lint::patterns::Patterns;
use serde::{Deserialize, Serialize};

/// Outcome of validating one commit message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Human-readable violations, in rule-evaluation order
    pub violations: Vec<String>,
    /// Header carries `!` but no `BREAKING CHANGE` footer is present
    pub needs_breaking_change_footer: bool,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Fold a single rule's output into the overall result
    pub fn absorb(&mut self, rule: RuleResult) {
        self.violations.extend(rule.violations);
        self.needs_breaking_change_footer |= rule.needs_breaking_change_footer;
    }
}

/// Everything a rule check may look at. Built once per validation pass.
#[derive(Debug)]
pub struct RuleContext<'a> {
    /// All lines of the message; index 0 is the header
    pub lines: Vec<&'a str>,
    pub header: &'a str,
    pub parts: HeaderParts<'a>,
    pub config: &'a LintConfig,
    pub patterns: &'a Patterns,
}

impl<'a> RuleContext<'a> {
    /// Lines after the header paired with their 1-based message line number
    pub fn body_lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().copied().enumerate().skip(1).map(|(i, line)| (i + 1, line))
    }
}

/// Result of a single rule check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleResult {
    pub violations: Vec<String>,
    pub needs_breaking_change_footer: bool,
}

impl RuleResult {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn violation(message: impl Into<String>) -> Self {
        Self {
            violations: vec![message.into()],
            needs_breaking_change_footer: false,
        }
    }

    pub fn with_violations(violations: Vec<String>) -> Self {
        Self {
            violations,
            needs_breaking_change_footer: false,
        }
    }

    pub fn needs_footer() -> Self {
        Self {
            violations: Vec::new(),
            needs_breaking_change_footer: true,
        }
    }

    /// `violation(message)` when `failed`, otherwise a pass
    pub fn check(failed: bool, message: impl FnOnce() -> String) -> Self {
        if failed {
            Self::violation(message())
        } else {
            Self::pass()
        }
    }
}

/// Signature shared by every registered rule check
pub type RuleFn = fn(&RuleContext<'_>) -> RuleResult;
