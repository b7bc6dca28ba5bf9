//! Rule catalog
//!
//! Static registry of every rule gommit knows about, and the ordered table of
//! rule checks the validator runs.

use crate::lint::rules;
use crate::lint::types::RuleFn;

/// Name and human description of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub const HEADER_FORMAT: &str = "header-format";
pub const HEADER_MAX_LENGTH: &str = "header-max-length";
pub const HEADER_LOWERCASE: &str = "header-lowercase";
pub const TYPE_ENUM: &str = "type-enum";
pub const TYPE_CASE: &str = "type-case";
pub const TYPE_EMPTY: &str = "type-empty";
pub const SCOPE_CASE: &str = "scope-case";
pub const SUBJECT_EMPTY: &str = "subject-empty";
pub const DESCRIPTION_CASE: &str = "description-case";
pub const BODY_LINE_MAX_LENGTH: &str = "body-line-max-length";
pub const FOOTER_FORMAT: &str = "footer-format";
pub const BREAKING_CHANGE: &str = "breaking-change";
pub const AUTO_BREAKING_CHANGE: &str = "auto-breaking-change";

const fn rule(name: &'static str, description: &'static str) -> RuleDescriptor {
    RuleDescriptor { name, description }
}

/// Every known rule, including `auto-breaking-change` which gates the repair
/// loop rather than the validator
pub const CATALOG: &[RuleDescriptor] = &[
    rule(HEADER_FORMAT, "Header must be in format: <type>[optional scope][!]: <description>"),
    rule(HEADER_MAX_LENGTH, "Header must not exceed the configured maximum length"),
    rule(HEADER_LOWERCASE, "Header (short description) must be all lowercase"),
    rule(TYPE_ENUM, "Type must be one of the allowed types"),
    rule(TYPE_CASE, "Type must be in lowercase"),
    rule(TYPE_EMPTY, "Type must not be empty"),
    rule(SCOPE_CASE, "Scope must be in lowercase"),
    rule(SUBJECT_EMPTY, "Subject must not be empty"),
    rule(DESCRIPTION_CASE, "Description must start with lowercase"),
    rule(BODY_LINE_MAX_LENGTH, "Body lines must not exceed the configured maximum length"),
    rule(FOOTER_FORMAT, "Footer must be in format: <token>: <value>"),
    rule(BREAKING_CHANGE, "Breaking changes must be indicated in footer"),
    rule(
        AUTO_BREAKING_CHANGE,
        "Automatically add BREAKING CHANGE to footer when '!' is present in header",
    ),
];

/// Rule checks in evaluation order. Violation order follows this table.
const RULE_CHECKS: &[(&str, RuleFn)] = &[
    (HEADER_FORMAT, rules::check_header_format),
    (HEADER_MAX_LENGTH, rules::check_header_max_length),
    (HEADER_LOWERCASE, rules::check_header_lowercase),
    (TYPE_ENUM, rules::check_type_enum),
    (TYPE_CASE, rules::check_type_case),
    (TYPE_EMPTY, rules::check_type_empty),
    (SCOPE_CASE, rules::check_scope_case),
    (SUBJECT_EMPTY, rules::check_subject_empty),
    (DESCRIPTION_CASE, rules::check_description_case),
    (BODY_LINE_MAX_LENGTH, rules::check_body_line_max_length),
    (FOOTER_FORMAT, rules::check_footer_format),
    (BREAKING_CHANGE, rules::check_breaking_change),
];

pub fn rule_checks() -> &'static [(&'static str, RuleFn)] {
    RULE_CHECKS
}

pub fn all_rules() -> &'static [RuleDescriptor] {
    CATALOG
}

pub fn find_rule(name: &str) -> Option<&'static RuleDescriptor> {
    CATALOG.iter().find(|r| r.name == name)
}

/// Verify catalog consistency: unique names, every check catalogued
pub fn verify_rules() -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for descriptor in CATALOG {
        if !seen.insert(descriptor.name) {
            return Err(format!("Duplicate rule name: {}", descriptor.name));
        }
    }

    let mut checked = std::collections::HashSet::new();
    for (name, _) in RULE_CHECKS {
        if !checked.insert(*name) {
            return Err(format!("Rule checked twice: {}", name));
        }
        if find_rule(name).is_none() {
            return Err(format!("Rule check without catalog entry: {}", name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_verification() {
        assert_eq!(verify_rules(), Ok(()));
    }

    #[test]
    fn test_every_rule_but_auto_breaking_change_is_checked() {
        let unchecked: Vec<_> = CATALOG
            .iter()
            .filter(|d| !RULE_CHECKS.iter().any(|(name, _)| *name == d.name))
            .map(|d| d.name)
            .collect();
        assert_eq!(unchecked, vec![AUTO_BREAKING_CHANGE]);
    }

    #[test]
    fn test_evaluation_order_matches_catalog_order() {
        let checked: Vec<_> = RULE_CHECKS.iter().map(|(name, _)| *name).collect();
        let catalogued: Vec<_> = CATALOG.iter().map(|d| d.name).take(checked.len()).collect();
        assert_eq!(checked, catalogued);
    }

    #[test]
    fn test_find_rule() {
        assert_eq!(find_rule(TYPE_ENUM).map(|r| r.name), Some("type-enum"));
        assert!(find_rule("no-such-rule").is_none());
    }
}
