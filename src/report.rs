//! Terminal output

use crate::config::LintConfig;
use crate::lint::{RuleDescriptor, ValidationResult};
use colored::*;

/// Output format for `--check`
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_heading(message: &str) {
    eprintln!("{}", message.cyan().bold());
}

pub fn print_violations(violations: &[String]) {
    eprintln!("{}", "Commit message does not follow the configured rules:".red().bold());
    for violation in violations {
        eprintln!("{}", format!("  • {violation}").yellow());
    }
    eprintln!();
}

pub fn print_success(message: &str) {
    println!("{} {}", "✔".green().bold(), "Commit message is valid.".green().bold());
    println!("{}", "Final commit message:".cyan().bold());
    println!("{}", message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red().bold());
}

pub fn print_result(result: &ValidationResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            if result.is_valid() {
                println!("{} {}", "✔".green().bold(), "Commit message is valid.".green().bold());
            } else {
                print_violations(&result.violations);
            }
            if result.needs_breaking_change_footer {
                println!(
                    "{}",
                    "Header marks a breaking change but no BREAKING CHANGE footer was found".yellow()
                );
            }
        }
    }
    Ok(())
}

pub fn print_rules(rules: &[RuleDescriptor], config: &LintConfig) {
    for rule in rules {
        let state = if config.is_rule_enabled(rule.name) {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };
        println!("{:<22} {:<9} {}", rule.name.bold(), state, rule.description);
    }
}
