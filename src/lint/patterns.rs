//! Compiled regular expressions used by the rules.

use regex::Regex;

/// Header shape accepted by `header-format`. The type list is fixed here and
/// is independent of the configurable `allowed_types` used by `type-enum`.
pub const HEADER_PATTERN: &str =
    r"^(feat|fix|build|chore|ci|docs|style|refactor|perf|test)(\([a-z0-9-]+\))?!?: .+$";

/// Generic `TOKEN: value` trailer
pub const FOOTER_PATTERN: &str = r"^([A-Z-]+)\s*:\s*(.+)$";

/// `BREAKING CHANGE:` / `BREAKING-CHANGE:` marker trailer
pub const BREAKING_CHANGE_PATTERN: &str = r"^BREAKING[ -]CHANGE:(\s|$)";

/// Patterns compiled once and shared by reference for the whole run.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub header: Regex,
    pub footer: Regex,
    pub breaking_change: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
            footer: Regex::new(FOOTER_PATTERN)?,
            breaking_change: Regex::new(BREAKING_CHANGE_PATTERN)?,
        })
    }

    pub fn is_breaking_change_footer(&self, line: &str) -> bool {
        self.breaking_change.is_match(line)
    }

    /// Whether any of `lines` is a breaking-change marker footer
    pub fn contains_breaking_change<'a, I>(&self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().any(|line| self.is_breaking_change_footer(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::compile().unwrap()
    }

    #[test]
    fn test_header_pattern() {
        let p = patterns();
        assert!(p.header.is_match("feat: add new feature"));
        assert!(p.header.is_match("fix(core-io)!: handle eof"));
        assert!(!p.header.is_match("revert: undo change"));
        assert!(!p.header.is_match("feat(Core): add"));
        assert!(!p.header.is_match("feat:"));
        assert!(!p.header.is_match("feat: "));
    }

    #[test]
    fn test_contains_breaking_change() {
        let p = patterns();
        assert!(p.contains_breaking_change(["Some text", "BREAKING CHANGE: This is a breaking change"]));
        assert!(p.contains_breaking_change(["BREAKING-CHANGE: dashed form"]));
        assert!(p.contains_breaking_change(["BREAKING CHANGE:"]));
        assert!(!p.contains_breaking_change(["Some text", "This is not a breaking change"]));
        assert!(!p.contains_breaking_change(Vec::<&str>::new()));
    }

    #[test]
    fn test_footer_pattern() {
        let p = patterns();
        assert!(p.footer.is_match("CLOSES: #123"));
        assert!(p.footer.is_match("SIGNED-OFF-BY : someone"));
        assert!(p.footer.is_match("REFS:  "));
        assert!(!p.footer.is_match("Reviewed-by: John Doe"));
        assert!(!p.footer.is_match("BREAKING CHANGE: api"));
        assert!(!p.footer.is_match("REFS:"));
    }
}
