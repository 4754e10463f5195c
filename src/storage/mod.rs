//! Storage layer for mdnote
//!
//! Provides flat-file storage for templates and notes, the templates
//! directory bootstrap, and the activity log hook used after every write.

pub mod file_io;
pub mod init;
pub mod notes;
pub mod templates;

pub use file_io::{read_yaml_required, write_text, WriteOutcome};
pub use init::initialize_templates;
pub use notes::NoteRepository;
pub use templates::TemplateRepository;

use std::path::Path;

use crate::audit::{ActivityEntry, ActivityLogger, EntryKind};
use crate::config::Settings;
use crate::error::MdResult;

/// Main storage coordinator that provides access to all repositories
#[derive(Debug, Clone)]
pub struct Storage {
    pub templates: TemplateRepository,
    pub notes: NoteRepository,
    activity: Option<ActivityLogger>,
}

impl Storage {
    /// Create a new Storage instance from settings
    ///
    /// Nothing is created on disk until a repository is used.
    pub fn new(settings: &Settings) -> Self {
        Self {
            templates: TemplateRepository::new(settings.templates_dir.clone()),
            notes: NoteRepository::new(settings.notes_dir()),
            activity: settings.activity_log.clone().map(ActivityLogger::new),
        }
    }

    /// Get the activity logger, if logging is enabled
    pub fn activity(&self) -> Option<&ActivityLogger> {
        self.activity.as_ref()
    }

    /// Record a completed write in the activity log
    pub fn log_write(
        &self,
        kind: EntryKind,
        name: &str,
        path: &Path,
        outcome: WriteOutcome,
    ) -> MdResult<()> {
        match &self.activity {
            Some(logger) => logger.log(&ActivityEntry::new(outcome.into(), kind, name, path)),
            None => Ok(()),
        }
    }
}
