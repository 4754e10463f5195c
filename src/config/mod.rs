//! Configuration module for mdnote
//!
//! This module provides configuration management including:
//! - Config file discovery (working directory, then home directory)
//! - Settings parsing and environment overrides

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
