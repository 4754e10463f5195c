//! Custom error types for mdnote
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failure is either bad user input
//! (`ValidationError`) or a filesystem/parse problem tied to a path.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Input rejected before any filesystem work happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cannot be empty")]
    EmptyName,

    #[error("too long ({0} characters, max 255)")]
    NameTooLong(usize),

    #[error("contains invalid characters")]
    InvalidCharacters,

    #[error("cannot be empty or only whitespace")]
    EmptyTitle,

    #[error("too long ({0} characters, max 100)")]
    TitleTooLong(usize),
}

impl ValidationError {
    /// The user-facing name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong(_) | Self::InvalidCharacters => "file name",
            Self::EmptyTitle | Self::TitleTooLong(_) => "title",
        }
    }
}

/// The filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Create,
    Read,
    Write,
    List,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Create => write!(f, "create"),
            FileOp::Read => write!(f, "read"),
            FileOp::Write => write!(f, "write"),
            FileOp::List => write!(f, "list"),
        }
    }
}

/// The main error type for mdnote operations
#[derive(Error, Debug)]
pub enum MdError {
    /// Bad user input
    #[error("Validation error for {}: {0}", .0.field())]
    Validation(#[from] ValidationError),

    /// An I/O failure on a specific path
    #[error("{op} error for file {}: {source}", .path.display())]
    File {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template file that is not well-formed YAML
    #[error("parse error for file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Activity log entries that cannot be encoded or decoded
    #[error("Activity log error: {0}")]
    Activity(String),
}

impl MdError {
    /// Wrap an I/O error with the operation and path it happened on
    pub fn file(op: FileOp, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::File {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Check if this is a file error for the given operation
    pub fn is_file_op(&self, expected: FileOp) -> bool {
        matches!(self, Self::File { op, .. } if *op == expected)
    }
}

impl From<serde_json::Error> for MdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Activity(err.to_string())
    }
}

/// Result type alias for mdnote operations
pub type MdResult<T> = Result<T, MdError>;
