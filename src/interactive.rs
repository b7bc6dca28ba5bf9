//! Terminal implementations of the repair loop's editor and prompt.

use crate::error::{Error, Result};
use crate::repair::{BreakingChangePrompt, EditOutcome, MessageEditor};
use crate::report;
use dialoguer::{Editor, Input};

/// Opens `$VISUAL`/`$EDITOR` on the message.
///
/// Quitting without saving counts as a cancellation.
#[derive(Debug, Default)]
pub struct TerminalEditor {
    executable: Option<String>,
}

impl TerminalEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific editor command instead of the environment's
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }
}

impl MessageEditor for TerminalEditor {
    fn edit(&mut self, seed: &str, violations: &[String]) -> Result<EditOutcome> {
        report::print_violations(violations);
        report::print_heading("Please edit your commit message to follow the rules:");

        let mut editor = Editor::new();
        editor.extension(".txt").require_save(true).trim_newlines(false);
        if let Some(executable) = &self.executable {
            editor.executable(executable);
        }

        match editor.edit(seed).map_err(Error::Editor)? {
            Some(text) => Ok(EditOutcome::Edited(text)),
            None => Ok(EditOutcome::Cancelled),
        }
    }
}

/// Asks on the terminal for a one-line breaking-change description
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl BreakingChangePrompt for TerminalPrompt {
    fn describe_breaking_change(&mut self) -> Result<String> {
        let description = Input::<String>::new()
            .with_prompt("Describe briefly the breaking change (leave empty for no description)")
            .allow_empty(true)
            .interact_text()?;
        Ok(description.trim().to_string())
    }
}
