//! Forgiving parser for the commit header line.
//!
//! Parsing never fails. Malformed headers are reported by the rules, not by
//! the parser.

/// Separator between the `type(scope)!` prefix and the description
pub const SEPARATOR: &str = ": ";

/// Borrowed view of a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderParts<'a> {
    /// Text before the first `(`, `!` or `:`; before the first `(` when
    /// there is no separator
    pub type_: &'a str,
    /// Text between the first `(` and the following `)`, only when there is
    /// a separator
    pub scope: Option<&'a str>,
    /// A `!` appears in the prefix
    pub breaking: bool,
    /// Text after the first `": "`, empty when there is no separator
    pub description: &'a str,
    /// The header contains `": "`
    pub has_separator: bool,
}

/// Without a separator there is no scope or description and the type is
/// everything before the first `(`.
pub fn parse_header(header: &str) -> HeaderParts<'_> {
    let Some((prefix, description)) = header.split_once(SEPARATOR) else {
        let type_end = header.find('(').unwrap_or(header.len());
        return HeaderParts {
            type_: &header[..type_end],
            breaking: header.contains('!'),
            ..HeaderParts::default()
        };
    };

    let type_end = prefix.find(['(', '!', ':']).unwrap_or(prefix.len());
    let type_ = &prefix[..type_end];

    let scope = prefix.find('(').and_then(|open| {
        let rest = &prefix[open + 1..];
        rest.find(')').map(|close| &rest[..close])
    });

    HeaderParts {
        type_,
        scope,
        breaking: prefix.contains('!'),
        description,
        has_separator: true,
    }
}
