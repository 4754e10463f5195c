//! Activity logger for the append-only activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FileOp, MdError, MdResult};

use super::entry::ActivityEntry;

/// Handles writing entries to the activity log file (JSONL)
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Create a new ActivityLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &ActivityEntry) -> MdResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| MdError::file(FileOp::Write, &self.log_path, e))?;

        let json = serde_json::to_string(entry)?;

        writeln!(file, "{}", json).map_err(|e| MdError::file(FileOp::Write, &self.log_path, e))?;

        file.flush()
            .map_err(|e| MdError::file(FileOp::Write, &self.log_path, e))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> MdResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| MdError::file(FileOp::Read, &self.log_path, e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MdError::file(FileOp::Read, &self.log_path, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                MdError::Activity(format!("bad entry at line {}: {}", line_num + 1, e))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> MdResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the path to the activity log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
