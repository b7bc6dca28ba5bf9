//! Error types for gommit.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
///
/// Rule violations are not errors: they are returned as data in a
/// [`ValidationResult`](crate::lint::ValidationResult). The variants here are
/// either structural failures or terminal states of the repair loop.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("failed to parse config file '{}'", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid built-in pattern")]
    Pattern(#[from] regex::Error),

    #[error("editor failed")]
    Editor(#[source] dialoguer::Error),

    #[error("prompt failed")]
    Prompt(#[from] dialoguer::Error),

    #[error("commit message was not modified")]
    NotModified,

    #[error("commit message still violates {} rule(s)", .0.len())]
    StillInvalid(Vec<String>),
}

impl Error {
    /// Violations that caused the failure, if this is a rule failure.
    pub fn violations(&self) -> &[String] {
        match self {
            Error::StillInvalid(violations) => violations,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
