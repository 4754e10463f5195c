//! Core data models for mdnote
//!
//! This module contains the data structures of the note-generation domain:
//! templates, rendered notes, sanitized names, and tag scanning.

pub mod name;
pub mod note;
pub mod tags;
pub mod template;

pub use name::{sanitize_file_name, validate_file_name, validate_title, SanitizedName};
pub use note::{Note, NoteSummary, NOTE_EXTENSION};
pub use tags::scan_tags;
pub use template::{Template, DEFAULT_TEMPLATE_CONTENT, DEFAULT_TEMPLATE_NAME, TEMPLATE_EXTENSION};
