//! Rule checks
//!
//! One function per rule. Each receives the shared [`RuleContext`] and
//! reports at most one violation, except the per-line body and footer rules.

use crate::lint::types::{RuleContext, RuleResult};

fn is_lowercase(s: &str) -> bool {
    s.to_lowercase() == s
}

pub fn check_header_format(ctx: &RuleContext<'_>) -> RuleResult {
    RuleResult::check(!ctx.patterns.header.is_match(ctx.header), || {
        "Header must be in format: <type>[optional scope][!]: <description>".to_string()
    })
}

pub fn check_header_max_length(ctx: &RuleContext<'_>) -> RuleResult {
    let max = ctx.config.header_max_length;
    RuleResult::check(ctx.header.chars().count() > max, || {
        format!("Header must not exceed {max} characters")
    })
}

pub fn check_header_lowercase(ctx: &RuleContext<'_>) -> RuleResult {
    RuleResult::check(!is_lowercase(ctx.header), || {
        "Header (short description) must be all lowercase".to_string()
    })
}

pub fn check_type_enum(ctx: &RuleContext<'_>) -> RuleResult {
    let type_ = ctx.parts.type_;
    let allowed = &ctx.config.allowed_types;
    RuleResult::check(!allowed.iter().any(|t| t == type_), || {
        format!(
            "Type '{}' is not allowed. Allowed types are: {}",
            type_,
            allowed.join(", ")
        )
    })
}

pub fn check_type_case(ctx: &RuleContext<'_>) -> RuleResult {
    RuleResult::check(!is_lowercase(ctx.parts.type_), || {
        "Type must be in lowercase".to_string()
    })
}

pub fn check_type_empty(ctx: &RuleContext<'_>) -> RuleResult {
    RuleResult::check(ctx.parts.type_.is_empty(), || {
        "Type must not be empty".to_string()
    })
}

pub fn check_scope_case(ctx: &RuleContext<'_>) -> RuleResult {
    let uppercase_scope = ctx.parts.scope.is_some_and(|scope| !is_lowercase(scope));
    RuleResult::check(uppercase_scope, || "Scope must be in lowercase".to_string())
}

pub fn check_subject_empty(ctx: &RuleContext<'_>) -> RuleResult {
    let missing = !ctx.parts.has_separator || ctx.parts.description.is_empty();
    RuleResult::check(missing, || "Subject must not be empty".to_string())
}

pub fn check_description_case(ctx: &RuleContext<'_>) -> RuleResult {
    let starts_uppercase = ctx.parts.has_separator
        && ctx
            .parts
            .description
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase());
    RuleResult::check(starts_uppercase, || {
        "Description must start with lowercase".to_string()
    })
}

pub fn check_body_line_max_length(ctx: &RuleContext<'_>) -> RuleResult {
    let max = ctx.config.body_line_max_length;
    let violations = ctx
        .body_lines()
        .filter(|(_, line)| line.chars().count() > max)
        .map(|(number, _)| format!("Body line {number} exceeds {max} characters"))
        .collect();
    RuleResult::with_violations(violations)
}

/// The marker footer is exempt, so an empty `BREAKING CHANGE:` value passes.
pub fn check_footer_format(ctx: &RuleContext<'_>) -> RuleResult {
    let violations = ctx
        .body_lines()
        .filter(|(_, line)| {
            ctx.patterns.footer.is_match(line) && !ctx.patterns.is_breaking_change_footer(line)
        })
        .filter(|(_, line)| match line.split_once(':') {
            Some((_, value)) => value.trim().is_empty(),
            None => true,
        })
        .map(|(number, _)| format!("Footer line {number} must be in format: <token>: <value>"))
        .collect();
    RuleResult::with_violations(violations)
}

pub fn check_breaking_change(ctx: &RuleContext<'_>) -> RuleResult {
    let has_footer = ctx
        .patterns
        .contains_breaking_change(ctx.body_lines().map(|(_, line)| line));
    if ctx.header.contains('!') && !has_footer {
        RuleResult::needs_footer()
    } else {
        RuleResult::pass()
    }
}
