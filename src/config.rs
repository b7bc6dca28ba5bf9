//! Lint configuration and config-file resolution.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in every candidate directory.
pub const CONFIG_FILE_NAME: &str = "gommit.conf.yaml";

/// Per-project directory, relative to the working directory.
pub const PROJECT_CONFIG_DIR: &str = ".gommit";

pub const DEFAULT_HEADER_MAX_LENGTH: usize = 50;
pub const DEFAULT_BODY_LINE_MAX_LENGTH: usize = 72;
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Configuration consumed by the validator.
///
/// Always fully populated: zero lengths and an empty type list are replaced
/// by the defaults when the config is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintConfig {
    /// Rules that are skipped during validation
    pub disabled_rules: Vec<String>,
    /// Maximum header length in characters
    pub header_max_length: usize,
    /// Maximum length of every line after the header, in characters
    pub body_line_max_length: usize,
    /// Types accepted by the `type-enum` rule, in display order
    pub allowed_types: Vec<String>,
}

/// Shape of the YAML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    disabled_rules: Vec<String>,
    #[serde(default)]
    header_max_length: Option<usize>,
    #[serde(default)]
    body_line_max_length: Option<usize>,
    #[serde(default)]
    allowed_types: Vec<String>,
}

impl From<ConfigFile> for LintConfig {
    fn from(file: ConfigFile) -> Self {
        let header_max_length = match file.header_max_length {
            Some(n) if n > 0 => n,
            _ => DEFAULT_HEADER_MAX_LENGTH,
        };
        let body_line_max_length = match file.body_line_max_length {
            Some(n) if n > 0 => n,
            _ => DEFAULT_BODY_LINE_MAX_LENGTH,
        };
        let allowed_types = if file.allowed_types.is_empty() {
            DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect()
        } else {
            file.allowed_types
        };

        Self {
            disabled_rules: file.disabled_rules,
            header_max_length,
            body_line_max_length,
            allowed_types,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl LintConfig {
    /// Whether `rule_name` should run. Unknown names are enabled.
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        !self.disabled_rules.iter().any(|r| r == rule_name)
    }

    /// Parse configuration from a YAML string. An empty document yields defaults.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let file: Option<ConfigFile> = serde_yaml::from_str(yaml)?;
        Ok(file.unwrap_or_default().into())
    }

    /// Load configuration from a YAML file that must exist.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_yaml_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the first existing candidate, falling back to defaults.
    ///
    /// A candidate that exists but cannot be parsed is an error; the chain
    /// does not skip past a broken file.
    pub fn resolve(candidates: &[PathBuf]) -> Result<Self> {
        for candidate in candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "loading config");
                return Self::from_yaml_file(candidate);
            }
            debug!(path = %candidate.display(), "config candidate not present");
        }
        warn!("no config file found, using built-in defaults");
        Ok(Self::default())
    }
}

/// Candidate config files in lookup order: next to the executable, then the
/// project's `.gommit` directory.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join(CONFIG_FILE_NAME));
            }
        }
        Err(e) => warn!(error = %e, "cannot determine executable directory"),
    }
    match std::env::current_dir() {
        Ok(cwd) => candidates.push(cwd.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE_NAME)),
        Err(e) => warn!(error = %e, "cannot determine working directory"),
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.header_max_length, 50);
        assert_eq!(config.body_line_max_length, 72);
        assert_eq!(config.allowed_types.len(), 11);
        assert_eq!(config.allowed_types[0], "feat");
        assert_eq!(config.allowed_types[10], "revert");
        assert!(config.disabled_rules.is_empty());
    }

    #[test]
    fn test_rule_enabled() {
        let config = LintConfig {
            disabled_rules: vec!["rule1".to_string(), "rule2".to_string()],
            ..LintConfig::default()
        };
        assert!(!config.is_rule_enabled("rule1"));
        assert!(!config.is_rule_enabled("rule2"));
        assert!(config.is_rule_enabled("rule3"));
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let config = LintConfig::from_yaml_str(
            "header_max_length: 0\nbody_line_max_length: 0\nallowed_types: []\n",
        )
        .unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_empty_document() {
        let config = LintConfig::from_yaml_str("").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_default_candidates_order() {
        let candidates = default_candidates();
        let last = candidates.last().unwrap();
        assert!(last.ends_with(Path::new(PROJECT_CONFIG_DIR).join(CONFIG_FILE_NAME)));
    }
}
