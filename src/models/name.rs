//! File-name sanitizing and input validation
//!
//! Names and titles are checked here before any file is touched, so invalid
//! input never leaves a partial file behind.

use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;

/// Maximum length of a raw name and of a sanitized stem
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a note title
pub const MAX_TITLE_LEN: usize = 100;

/// Characters that are never accepted in a raw file name
const INVALID_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Reduce an arbitrary string to a safe file stem
///
/// Spaces become underscores, everything outside `[A-Za-z0-9_-]` is dropped,
/// the result is lower-cased and cut to 255 characters. Never fails; an input
/// made only of invalid characters yields an empty string.
pub fn sanitize_file_name(name: &str) -> String {
    let mut stem: String = name
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    // Only ASCII survives the filter, so byte truncation is safe
    stem.truncate(MAX_NAME_LEN);
    stem
}

/// Check a raw, user-supplied file name
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(name.len()));
    }

    if name.contains(INVALID_NAME_CHARS) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(())
}

/// Check a note title
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong(title.len()));
    }

    Ok(())
}

/// A validated, sanitized file stem
///
/// The only way to build one is through validation and sanitization, so any
/// path derived from it is safe to create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SanitizedName(String);

impl SanitizedName {
    /// Validate a raw name and sanitize it
    ///
    /// A name made only of characters the sanitizer drops is rejected as
    /// empty, since it would produce a file called `.md` or `.yaml`.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_file_name(raw)?;

        let stem = sanitize_file_name(raw);
        if stem.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self(stem))
    }

    /// Get the stem as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name with the given extension appended
    pub fn with_extension(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize_file_name("My Template!"), "my_template");
        assert_eq!(sanitize_file_name("Hello World"), "hello_world");
        assert_eq!(sanitize_file_name("daily-log_2024"), "daily-log_2024");
    }

    #[test]
    fn test_sanitize_drops_everything_invalid() {
        assert_eq!(sanitize_file_name("!!!"), "");
        assert_eq!(sanitize_file_name("café"), "caf");
        assert_eq!(sanitize_file_name(""), "");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "a".repeat(400);
        assert_eq!(sanitize_file_name(&long).len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_sanitize_idempotent() {
        let inputs = [
            "My Template!",
            "  spaced  out  ",
            "Ünïcödé and ASCII",
            "a/b\\c:d*e?f\"g<h>i|j",
            "UPPER-lower_123",
            "",
        ];

        for input in inputs {
            let once = sanitize_file_name(input);
            assert_eq!(sanitize_file_name(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_sanitized_charset() {
        let stem = sanitize_file_name("Weekly Review: Q3 (draft) #2");
        assert!(stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
        assert_eq!(stem, "weekly_review_q3_draft_2");
    }

    #[test]
    fn test_validate_file_name() {
        assert_eq!(validate_file_name(""), Err(ValidationError::EmptyName));
        assert_eq!(
            validate_file_name(&"x".repeat(256)),
            Err(ValidationError::NameTooLong(256))
        );
        assert!(validate_file_name(&"x".repeat(255)).is_ok());

        for bad in ["a/b", "a\\b", "a:b", "a*b", "a?b", "a\"b", "a<b", "a>b", "a|b"] {
            assert_eq!(
                validate_file_name(bad),
                Err(ValidationError::InvalidCharacters),
                "input: {bad}"
            );
        }

        assert!(validate_file_name("My Template!").is_ok());
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(
            validate_title(&"t".repeat(101)),
            Err(ValidationError::TitleTooLong(101))
        );
        assert!(validate_title(&"t".repeat(100)).is_ok());
        assert!(validate_title("Hello World").is_ok());
    }

    #[test]
    fn test_sanitized_name() {
        let name = SanitizedName::new("My Template!").unwrap();
        assert_eq!(name.as_str(), "my_template");
        assert_eq!(name.with_extension("yaml"), "my_template.yaml");
        assert_eq!(name.to_string(), "my_template");
    }

    #[test]
    fn test_sanitized_name_rejects_empty_stem() {
        assert_eq!(SanitizedName::new("!!!"), Err(ValidationError::EmptyName));
        assert_eq!(
            SanitizedName::new("../etc"),
            Err(ValidationError::InvalidCharacters)
        );
    }
}
