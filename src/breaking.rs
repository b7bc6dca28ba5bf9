//! `BREAKING CHANGE` footer injection.

pub const BREAKING_CHANGE_TOKEN: &str = "BREAKING CHANGE";

/// Append a `BREAKING CHANGE: <description>` trailer to `message`.
///
/// Exactly one blank line separates the existing text from the trailer and
/// the result is trimmed. An empty description is allowed. The result is not
/// re-validated here.
pub fn append_breaking_change(message: &str, description: &str) -> String {
    let footer = format!("{BREAKING_CHANGE_TOKEN}: {description}");
    let existing = message.trim_end();

    let combined = if existing.is_empty() {
        footer
    } else {
        format!("{existing}\n\n{footer}")
    };

    combined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_message_without_footer() {
        assert_eq!(
            append_breaking_change("feat!: add new feature", "This breaks the API"),
            "feat!: add new feature\n\nBREAKING CHANGE: This breaks the API"
        );
    }

    #[test]
    fn test_append_after_existing_trailer() {
        assert_eq!(
            append_breaking_change(
                "feat!: add new feature\n\nReviewed-by: John Doe",
                "This breaks the API"
            ),
            "feat!: add new feature\n\nReviewed-by: John Doe\n\nBREAKING CHANGE: This breaks the API"
        );
    }

    #[test]
    fn test_trailing_blank_lines_collapse_to_one() {
        assert_eq!(
            append_breaking_change("feat!: add new feature\n\n\n", "gone"),
            "feat!: add new feature\n\nBREAKING CHANGE: gone"
        );
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(
            append_breaking_change("feat!: drop v1", ""),
            "feat!: drop v1\n\nBREAKING CHANGE:"
        );
    }
}
