//! mdnote - markdown notes from YAML templates
//!
//! This library provides the core functionality for the `mdnote` command-line
//! tool. It renders YAML templates into markdown notes by substituting the
//! `{{TITLE}}`, `{{DATE}}`, `{{TIME}}` and `{{TAGS}}` tokens, and manages the
//! templates and notes directories.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config file discovery and settings
//! - `error`: Custom error types
//! - `models`: Templates, notes, name sanitizing/validation, tag scanning
//! - `render`: Placeholder substitution
//! - `storage`: Flat-file repositories and the templates bootstrap
//! - `services`: Template and note pipelines
//! - `audit`: Append-only activity log
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use mdnote::config::{ConfigPaths, Settings};
//! use mdnote::services::{NewNote, NoteService};
//! use mdnote::storage::Storage;
//!
//! let settings = Settings::load_or_create(&ConfigPaths::new(None)?)?;
//! let storage = Storage::new(&settings);
//! NoteService::new(&storage).create_note(NewNote::titled("Hello World"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;

pub use error::{MdError, MdResult};
