//! Note service
//!
//! Runs the note pipeline: validate, load the template, render, write, and
//! record the write. A failure at any step stops the remaining ones.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::audit::EntryKind;
use crate::error::MdResult;
use crate::models::{validate_title, Note, NoteSummary, SanitizedName, DEFAULT_TEMPLATE_NAME};
use crate::render::{render_content, RenderContext};
use crate::storage::{Storage, WriteOutcome};

/// Service for note creation and listing
pub struct NoteService<'a> {
    storage: &'a Storage,
}

/// Input for a new note
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    /// Explicit file name; the title is used when absent
    pub name: Option<String>,
    pub template: String,
    /// Tags for `{{TAGS}}`; the template's own tags are used when empty
    pub tags: Vec<String>,
}

impl NewNote {
    /// A note from the default template with no explicit name or tags
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: None,
            template: DEFAULT_TEMPLATE_NAME.to_string(),
            tags: Vec::new(),
        }
    }
}

/// Result of creating a note
#[derive(Debug, Clone)]
pub struct CreatedNote {
    pub note: Note,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

impl<'a> NoteService<'a> {
    /// Create a new note service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a note stamped with the current local time
    pub fn create_note(&self, request: NewNote) -> MdResult<CreatedNote> {
        self.create_note_at(request, Local::now().naive_local())
    }

    /// Create a note stamped with a fixed instant
    pub fn create_note_at(&self, request: NewNote, now: NaiveDateTime) -> MdResult<CreatedNote> {
        let raw_name = request.name.as_deref().unwrap_or(&request.title);
        let name = SanitizedName::new(raw_name)?;
        validate_title(&request.title)?;
        let template_name = SanitizedName::new(&request.template)?;

        self.storage.templates.ensure()?;
        let template = self.storage.templates.load(&template_name)?;

        let tags = if request.tags.is_empty() {
            template.tags.clone()
        } else {
            request.tags
        };

        let ctx = RenderContext::at(request.title, tags, now);
        let body = render_content(&template, &ctx);

        let note = Note {
            name,
            title: ctx.title,
            tags: ctx.tags,
            body,
        };

        let outcome = self.storage.notes.write(&note)?;
        let path = self.storage.notes.path_for(&note);

        // The note is already on disk; a log failure must not fail the command
        if let Err(e) = self
            .storage
            .log_write(EntryKind::Note, note.name.as_str(), &path, outcome)
        {
            warn!(error = %e, name = %note.name, "failed to record note in activity log");
        }
        info!(name = %note.name, template = %template_name, "note written");

        Ok(CreatedNote {
            note,
            path,
            outcome,
        })
    }

    /// List notes with their tags
    pub fn list_notes(&self) -> MdResult<Vec<NoteSummary>> {
        self.storage.notes.list()
    }
}
