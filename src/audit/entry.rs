//! Activity entry data structures
//!
//! Defines the operation and file kinds recorded in the activity log and the
//! entry format itself.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::WriteOutcome;

/// Types of operations that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A new file was written
    Create,
    /// An existing file was replaced
    Overwrite,
}

impl From<WriteOutcome> for Operation {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Created => Operation::Create,
            WriteOutcome::Overwritten => Operation::Overwrite,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Overwrite => write!(f, "OVERWRITE"),
        }
    }
}

/// Kinds of files that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Template,
    Note,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Template => write!(f, "Template"),
            EntryKind::Note => write!(f, "Note"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the file was written (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub kind: EntryKind,

    /// Sanitized stem of the file
    pub name: String,

    /// Path the file was written to
    pub path: PathBuf,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        operation: Operation,
        kind: EntryKind,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            kind,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.kind,
            self.name,
            self.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_operation_from_outcome() {
        assert_eq!(Operation::from(WriteOutcome::Created), Operation::Create);
        assert_eq!(
            Operation::from(WriteOutcome::Overwritten),
            Operation::Overwrite
        );
    }

    #[test]
    fn test_serialization() {
        let entry = ActivityEntry::new(Operation::Create, EntryKind::Note, "hello", "hello.md");
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"kind\":\"note\""));

        let back: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_human_readable() {
        let mut entry = ActivityEntry::new(
            Operation::Overwrite,
            EntryKind::Template,
            "weekly",
            "templates/weekly.yaml",
        );
        entry.timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(
            entry.format_human_readable(),
            "[2024-01-15 10:30:00 UTC] OVERWRITE Template weekly (templates/weekly.yaml)"
        );
    }
}
