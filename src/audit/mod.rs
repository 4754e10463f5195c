//! Activity log for mdnote
//!
//! Records every template and note written, in an append-only log. Because
//! writes silently replace existing files, the log is the one place that says
//! whether a file was created or overwritten.
//!
//! # Example
//!
//! ```rust,ignore
//! use mdnote::audit::{ActivityEntry, ActivityLogger, EntryKind, Operation};
//!
//! let logger = ActivityLogger::new(".md_activity.log".into());
//! logger.log(&ActivityEntry::new(
//!     Operation::Create,
//!     EntryKind::Note,
//!     "hello_world",
//!     "hello_world.md",
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{ActivityEntry, EntryKind, Operation};
pub use logger::ActivityLogger;
