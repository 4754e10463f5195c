//! Display formatting for terminal output
//!
//! Provides utilities for formatting templates, notes, and the activity log
//! for terminal display.

pub mod activity;
pub mod note;
pub mod template;

pub use activity::format_activity;
pub use note::format_note_list;
pub use template::format_template_list;
