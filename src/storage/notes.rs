//! Note repository
//!
//! Notes are written as `<stem>.md` into the notes directory and read back
//! only to show their tags.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FileOp, MdError, MdResult};
use crate::models::{scan_tags, Note, NoteSummary, NOTE_EXTENSION};

use super::file_io::{ensure_dir, list_stems, write_text, WriteOutcome};

/// Repository for rendered notes
#[derive(Debug, Clone)]
pub struct NoteRepository {
    dir: PathBuf,
}

impl NoteRepository {
    /// Create a repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the notes directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a note is written to
    pub fn path_for(&self, note: &Note) -> PathBuf {
        self.dir.join(note.file_name())
    }

    /// Write a note, replacing any existing file of the same name
    pub fn write(&self, note: &Note) -> MdResult<WriteOutcome> {
        ensure_dir(&self.dir)?;

        let path = self.path_for(note);
        debug!(path = %path.display(), "writing note");
        write_text(&path, &note.body)
    }

    /// All notes with the tags found on their `Tags:` line, sorted by name
    pub fn list(&self) -> MdResult<Vec<NoteSummary>> {
        if !self.dir.is_dir() {
            warn!(dir = %self.dir.display(), "notes directory does not exist");
            return Ok(Vec::new());
        }

        let mut notes = Vec::new();
        for name in list_stems(&self.dir, NOTE_EXTENSION)? {
            let path = self.dir.join(format!("{}.{}", name, NOTE_EXTENSION));
            let text = std::fs::read_to_string(&path)
                .map_err(|e| MdError::file(FileOp::Read, &path, e))?;

            notes.push(NoteSummary {
                name,
                tags: scan_tags(&text),
            });
        }

        notes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(notes)
    }
}
