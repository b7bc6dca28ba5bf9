//! Repair loop
//!
//! Ties validation to interactive editing:
//!
//! 1. validate the message as read;
//! 2. when the header carries `!` without a footer and `auto-breaking-change`
//!    is enabled, ask for a description, append the footer and validate again;
//! 3. when violations remain, hand the message to the editor once and run
//!    steps 1-2 on the result;
//! 4. write the final, violation-free message back exactly once.
//!
//! An editor cancellation, or an edit that returns the original text, fails
//! with [`Error::NotModified`]. Violations left after the single edit fail with
//! [`Error::StillInvalid`]. The store is never written on failure.

use crate::breaking::append_breaking_change;
use crate::config::LintConfig;
use crate::error::{Error, Result};
use crate::lint::catalog::AUTO_BREAKING_CHANGE;
use crate::lint::{ValidationResult, Validator};
use crate::store::MessageStore;
use tracing::{debug, info};

/// What the editor hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Edited(String),
    Cancelled,
}

/// Interactive editing capability
pub trait MessageEditor {
    /// Let the user edit `seed`. `violations` explains why the edit is needed.
    fn edit(&mut self, seed: &str, violations: &[String]) -> Result<EditOutcome>;
}

/// Free-text prompt for the `BREAKING CHANGE` description
pub trait BreakingChangePrompt {
    /// May return an empty string.
    fn describe_breaking_change(&mut self) -> Result<String>;
}

/// A successful repair cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repaired {
    /// Final message, as written back to the store
    pub message: String,
    /// A `BREAKING CHANGE` footer was appended automatically
    pub breaking_change_added: bool,
    /// The editor was used
    pub edited: bool,
}

/// One pass of steps 1-2
struct Pass {
    message: String,
    result: ValidationResult,
    injected: bool,
}

pub struct RepairLoop<'a, E, P> {
    validator: &'a Validator,
    config: &'a LintConfig,
    editor: E,
    prompt: P,
}

impl<'a, E, P> RepairLoop<'a, E, P>
where
    E: MessageEditor,
    P: BreakingChangePrompt,
{
    pub fn new(validator: &'a Validator, config: &'a LintConfig, editor: E, prompt: P) -> Self {
        Self {
            validator,
            config,
            editor,
            prompt,
        }
    }

    /// Run one full repair cycle against `store`
    pub fn run<S: MessageStore>(&mut self, store: &mut S) -> Result<Repaired> {
        let original = store.read()?;
        let mut pass = self.validate_pass(original.clone())?;
        let mut edited = false;
        let mut breaking_change_added = pass.injected;

        if !pass.result.is_valid() {
            info!(
                violations = pass.result.violations.len(),
                "commit message invalid, opening editor"
            );
            let text = match self.editor.edit(&pass.message, &pass.result.violations)? {
                EditOutcome::Cancelled => {
                    info!("edit cancelled");
                    return Err(Error::NotModified);
                }
                EditOutcome::Edited(text) if text == original => {
                    info!("edited message identical to original");
                    return Err(Error::NotModified);
                }
                EditOutcome::Edited(text) => text,
            };

            edited = true;
            pass = self.validate_pass(text)?;
            breaking_change_added |= pass.injected;
            if !pass.result.is_valid() {
                info!(
                    violations = pass.result.violations.len(),
                    "commit message still invalid after edit"
                );
                return Err(Error::StillInvalid(pass.result.violations));
            }
        }

        store.write(&pass.message)?;
        info!(edited, breaking_change_added, "commit message accepted");

        Ok(Repaired {
            message: pass.message,
            breaking_change_added,
            edited,
        })
    }

    fn validate_pass(&mut self, message: String) -> Result<Pass> {
        let result = self.validator.validate(&message, self.config);
        debug!(
            violations = result.violations.len(),
            needs_footer = result.needs_breaking_change_footer,
            "validated"
        );

        if result.needs_breaking_change_footer
            && self.config.is_rule_enabled(AUTO_BREAKING_CHANGE)
        {
            let description = self.prompt.describe_breaking_change()?;
            let message = append_breaking_change(&message, &description);
            // Injection fixes only the footer; other violations must still surface.
            let result = self.validator.validate(&message, self.config);
            debug!(violations = result.violations.len(), "revalidated after footer injection");
            return Ok(Pass {
                message,
                result,
                injected: true,
            });
        }

        Ok(Pass {
            message,
            result,
            injected: false,
        })
    }
}
