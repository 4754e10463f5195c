//! Note CLI commands
//!
//! Implements note creation, the notes listing, and the activity history.

use clap::Args;

use crate::display::{format_activity, format_note_list};
use crate::error::MdResult;
use crate::models::DEFAULT_TEMPLATE_NAME;
use crate::services::{NewNote, NoteService};
use crate::storage::Storage;

/// Arguments for creating a note
#[derive(Args, Debug)]
pub struct NoteArgs {
    /// Title of the note
    #[arg(short, long)]
    pub title: String,

    /// File name without extension (defaults to the title)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Template to render
    #[arg(long, default_value = DEFAULT_TEMPLATE_NAME)]
    pub template: String,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

impl From<NoteArgs> for NewNote {
    fn from(args: NoteArgs) -> Self {
        let tags = args
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            title: args.title,
            name: args.name,
            template: args.template,
            tags,
        }
    }
}

/// Handle note creation
pub fn handle_note_command(storage: &Storage, args: NoteArgs) -> MdResult<()> {
    let service = NoteService::new(storage);
    let created = service.create_note(args.into())?;

    if created.outcome.is_overwrite() {
        println!("Markdown note '{}' overwritten.", created.path.display());
    } else {
        println!("Markdown note '{}' created successfully.", created.path.display());
    }

    Ok(())
}

/// Handle the notes listing
pub fn handle_list_command(storage: &Storage) -> MdResult<()> {
    let notes = NoteService::new(storage).list_notes()?;
    print!("{}", format_note_list(&notes));
    Ok(())
}

/// Handle the activity history listing
pub fn handle_history_command(storage: &Storage, limit: usize) -> MdResult<()> {
    match storage.activity() {
        Some(logger) => {
            let entries = logger.read_recent(limit)?;
            print!("{}", format_activity(&entries));
        }
        None => println!("Activity log is disabled (activity_log: null)."),
    }
    Ok(())
}
