//! Tag extraction from rendered notes
//!
//! Notes carry their tags on a single `Tags:` line. The scan is deliberately
//! permissive: pieces are trimmed but never dropped.

/// Prefix marking the tag line in a note
pub const TAGS_PREFIX: &str = "Tags:";

/// Extract the comma-separated tags from the first `Tags:` line
///
/// Returns an empty list when there is no such line or it has nothing after
/// the prefix; a raw split would give `[""]` for a bare `Tags:` line, which is
/// not kept. Trailing commas still produce empty entries.
pub fn scan_tags(text: &str) -> Vec<String> {
    let Some(rest) = text.lines().find_map(|line| line.strip_prefix(TAGS_PREFIX)) else {
        return Vec::new();
    };

    if rest.trim().is_empty() {
        return Vec::new();
    }

    rest.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_trims_entries() {
        let text = "# Title\n\nTags: foo, bar ,baz\n\nBody";
        assert_eq!(scan_tags(text), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_no_tag_line() {
        assert!(scan_tags("# Title\n\nJust text\n").is_empty());
        assert!(scan_tags("").is_empty());
    }

    #[test]
    fn test_first_line_wins() {
        let text = "Tags: one\nTags: two, three\n";
        assert_eq!(scan_tags(text), vec!["one"]);
    }

    #[test]
    fn test_prefix_must_start_line() {
        assert!(scan_tags("  Tags: indented\nSee Tags: inline\n").is_empty());
    }

    #[test]
    fn test_empty_tag_line() {
        assert!(scan_tags("Tags:\n").is_empty());
        assert!(scan_tags("Tags:   \n").is_empty());
    }

    #[test]
    fn test_trailing_comma_keeps_empty_entry() {
        assert_eq!(scan_tags("Tags: a, b,"), vec!["a", "b", ""]);
    }
}
