//! Business logic layer for mdnote
//!
//! Services sit between the CLI and storage: they validate input, run the
//! template and note pipelines, and record completed writes.

pub mod note;
pub mod template;

pub use note::{CreatedNote, NewNote, NoteService};
pub use template::{CreatedTemplate, TemplateService};
