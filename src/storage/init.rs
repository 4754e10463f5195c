//! Templates directory bootstrap
//!
//! Handles first-run setup: creating the templates directory and seeding it
//! with the default template.

use std::path::Path;

use tracing::info;

use crate::error::MdResult;
use crate::models::{DEFAULT_TEMPLATE_CONTENT, DEFAULT_TEMPLATE_NAME, TEMPLATE_EXTENSION};

use super::file_io::{ensure_dir, write_text};

/// Create the templates directory and its default template on first use
///
/// Returns true when the directory was created. Once the directory exists
/// this is a no-op, even if the default template was deleted since.
pub fn initialize_templates(dir: &Path) -> MdResult<bool> {
    if !needs_initialization(dir) {
        return Ok(false);
    }

    ensure_dir(dir)?;
    info!(dir = %dir.display(), "created templates directory");

    let default_path = dir.join(format!("{}.{}", DEFAULT_TEMPLATE_NAME, TEMPLATE_EXTENSION));
    write_text(&default_path, DEFAULT_TEMPLATE_CONTENT)?;
    info!(path = %default_path.display(), "created default template");

    Ok(true)
}

/// Check if the templates directory still has to be bootstrapped
pub fn needs_initialization(dir: &Path) -> bool {
    !dir.exists()
}
