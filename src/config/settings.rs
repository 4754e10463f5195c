//! User settings for mdnote
//!
//! Settings are read once at startup from `.md_config.yaml`, then adjusted by
//! environment variables. The resulting value is passed by reference to every
//! component and never mutated afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::paths::ConfigPaths;
use crate::error::{FileOp, MdError, MdResult};

/// Environment variable overriding `templates_dir`
pub const TEMPLATES_DIR_ENV: &str = "MD_TEMPLATES_DIR";

/// Environment variable overriding `notes_dir`
pub const NOTES_DIR_ENV: &str = "MD_NOTES_DIR";

/// Contents written when no config file exists yet
pub const DEFAULT_CONFIG: &str = r#"# mdnote configuration

# templates_dir: Directory where template files are stored
# Default is 'templates' in the current working directory
# Examples for custom paths:
#   Windows: C:\Users\YourUsername\Documents\templates
#   macOS:   /Users/YourUsername/Documents/templates
#   Linux:   /home/YourUsername/Documents/templates

templates_dir: templates

# notes_dir: Directory where notes are written (current directory if unset)
# notes_dir: notes

# activity_log: File recording every template and note written (null disables)
activity_log: .md_activity.log

# Note: the environment variables MD_TEMPLATES_DIR and MD_NOTES_DIR override
# the directories above at runtime.
"#;

/// User settings for mdnote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding `*.yaml` templates
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Directory notes are written to; the working directory when unset
    #[serde(default)]
    pub notes_dir: Option<PathBuf>,

    /// Append-only activity log; disabled when null
    #[serde(default = "default_activity_log")]
    pub activity_log: Option<PathBuf>,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_activity_log() -> Option<PathBuf> {
    Some(PathBuf::from(".md_activity.log"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            notes_dir: None,
            activity_log: default_activity_log(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating a default config file if none exists,
    /// then apply environment overrides
    pub fn load_or_create(paths: &ConfigPaths) -> MdResult<Self> {
        let mut settings = match paths.locate() {
            Some(path) => Self::load_from(&path)?,
            None => {
                let path = paths.default_config_file();
                std::fs::write(&path, DEFAULT_CONFIG)
                    .map_err(|e| MdError::file(FileOp::Write, &path, e))?;
                info!(path = %path.display(), "created default configuration file");
                Self::default()
            }
        };

        settings.apply_env();
        Ok(settings)
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> MdResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MdError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loading configuration");

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            MdError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using the given variable lookup; empty values are ignored
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(TEMPLATES_DIR_ENV).filter(|v| !v.is_empty()) {
            debug!(templates_dir = %dir, "templates directory overridden by environment");
            self.templates_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup(NOTES_DIR_ENV).filter(|v| !v.is_empty()) {
            debug!(notes_dir = %dir, "notes directory overridden by environment");
            self.notes_dir = Some(PathBuf::from(dir));
        }
    }

    /// Directory notes are written to
    pub fn notes_dir(&self) -> PathBuf {
        self.notes_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
