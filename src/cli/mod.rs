//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod note;
pub mod template;

pub use note::{handle_history_command, handle_list_command, handle_note_command, NoteArgs};
pub use template::{handle_template_command, TemplateCommands};
