pub mod breaking;
pub mod config;
pub mod error;
pub mod interactive;
pub mod lint;
pub mod repair;
pub mod report;
pub mod store;

pub use breaking::append_breaking_change;
pub use config::LintConfig;
pub use error::{Error, Result};
pub use lint::{ValidationResult, Validator};
pub use repair::{BreakingChangePrompt, EditOutcome, MessageEditor, RepairLoop, Repaired};
pub use store::{MessageFile, MessageStore};

/// Validates a commit message against `config` with freshly compiled patterns.
///
/// Convenience for one-off checks; callers validating repeatedly should keep
/// a [`Validator`] around instead.
///
/// # Arguments
///
/// * `message` - The raw commit message, header first.
/// * `config` - Rule selection and limits.
///
/// # Returns
///
/// The ordered violations and the breaking-change footer flag, or an error if
/// the built-in patterns fail to compile.
pub fn validate(message: &str, config: &LintConfig) -> Result<ValidationResult> {
    let validator = Validator::new()?;
    Ok(validator.validate(message, config))
}
