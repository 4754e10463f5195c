//! Note model
//!
//! A note is a rendered template ready to be written as `<name>.md`.

use serde::Serialize;
use std::fmt;

use super::name::SanitizedName;

/// File extension used for notes
pub const NOTE_EXTENSION: &str = "md";

/// A rendered note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// File stem derived from the explicit name or the title
    pub name: SanitizedName,

    /// Display title
    pub title: String,

    /// Tags substituted into the body
    pub tags: Vec<String>,

    /// Rendered markdown
    pub body: String,
}

impl Note {
    /// File name of this note, including the extension
    pub fn file_name(&self) -> String {
        self.name.with_extension(NOTE_EXTENSION)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A note found on disk, as shown by the listing command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    /// File stem without extension
    pub name: String,

    /// Tags read from the note's `Tags:` line
    pub tags: Vec<String>,
}
