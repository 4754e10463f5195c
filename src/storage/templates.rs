//! Template repository
//!
//! Templates live as `<stem>.yaml` files in a single flat directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::MdResult;
use crate::models::{SanitizedName, Template, DEFAULT_TEMPLATE_CONTENT, TEMPLATE_EXTENSION};

use super::file_io::{list_stems, read_yaml_required, write_text, WriteOutcome};
use super::init::initialize_templates;

/// Repository for template files
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    dir: PathBuf,
}

impl TemplateRepository {
    /// Create a repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the templates directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Bootstrap the directory with the default template if it is missing
    pub fn ensure(&self) -> MdResult<bool> {
        initialize_templates(&self.dir)
    }

    /// Path of the template file for a name
    pub fn path_for(&self, name: &SanitizedName) -> PathBuf {
        self.dir.join(name.with_extension(TEMPLATE_EXTENSION))
    }

    /// Write a fresh copy of the default template under `name`
    ///
    /// An existing template of the same name is replaced.
    pub fn create(&self, name: &SanitizedName) -> MdResult<WriteOutcome> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "writing template");
        write_text(&path, DEFAULT_TEMPLATE_CONTENT)
    }

    /// Names of all templates, in directory order
    pub fn list(&self) -> MdResult<Vec<String>> {
        list_stems(&self.dir, TEMPLATE_EXTENSION)
    }

    /// Load and parse a template
    pub fn load(&self, name: &SanitizedName) -> MdResult<Template> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "loading template");
        read_yaml_required(&path)
    }
}
