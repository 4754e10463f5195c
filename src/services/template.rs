//! Template service
//!
//! Business logic for creating and listing templates.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::audit::EntryKind;
use crate::error::MdResult;
use crate::models::SanitizedName;
use crate::storage::{Storage, WriteOutcome};

/// Service for template management
pub struct TemplateService<'a> {
    storage: &'a Storage,
}

/// Result of creating a template
#[derive(Debug, Clone)]
pub struct CreatedTemplate {
    pub name: SanitizedName,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

impl<'a> TemplateService<'a> {
    /// Create a new template service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Bootstrap the templates directory; true if it was created
    pub fn ensure_templates(&self) -> MdResult<bool> {
        self.storage.templates.ensure()
    }

    /// Create a template from the default content
    pub fn create_template(&self, raw_name: &str) -> MdResult<CreatedTemplate> {
        let name = SanitizedName::new(raw_name)?;

        self.ensure_templates()?;
        let outcome = self.storage.templates.create(&name)?;
        let path = self.storage.templates.path_for(&name);

        if let Err(e) = self
            .storage
            .log_write(EntryKind::Template, name.as_str(), &path, outcome)
        {
            warn!(error = %e, name = %name, "failed to record template in activity log");
        }
        info!(name = %name, overwrite = outcome.is_overwrite(), "template written");

        Ok(CreatedTemplate {
            name,
            path,
            outcome,
        })
    }

    /// List template names in directory order
    pub fn list_templates(&self) -> MdResult<Vec<String>> {
        self.ensure_templates()?;
        self.storage.templates.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::{MdError, ValidationError};
    use crate::models::DEFAULT_TEMPLATE_CONTENT;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            templates_dir: temp_dir.path().join("templates"),
            notes_dir: Some(temp_dir.path().join("notes")),
            activity_log: Some(temp_dir.path().join("activity.log")),
        };
        let storage = Storage::new(&settings);
        (temp_dir, storage)
    }

    #[test]
    fn test_create_template() {
        let (temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let created = service.create_template("My Template!").unwrap();

        assert_eq!(created.name.as_str(), "my_template");
        assert_eq!(created.outcome, WriteOutcome::Created);
        let path = temp_dir.path().join("templates/my_template.yaml");
        assert_eq!(created.path, path);
        assert_eq!(std::fs::read_to_string(path).unwrap(), DEFAULT_TEMPLATE_CONTENT);
    }

    #[test]
    fn test_create_twice_logs_overwrite() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        service.create_template("weekly").unwrap();
        let second = service.create_template("Weekly").unwrap();
        assert!(second.outcome.is_overwrite());

        let entries = storage.activity().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, crate::audit::Operation::Overwrite);
    }

    #[test]
    fn test_unwritable_activity_log_keeps_template() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logdir");
        std::fs::create_dir(&log_dir).unwrap();
        let settings = Settings {
            templates_dir: temp_dir.path().join("templates"),
            notes_dir: None,
            activity_log: Some(log_dir),
        };
        let storage = Storage::new(&settings);

        let created = TemplateService::new(&storage).create_template("weekly").unwrap();

        assert!(created.path.exists());
    }

    #[test]
    fn test_invalid_name_touches_nothing() {
        let (temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        let err = service.create_template("bad/name").unwrap_err();

        assert!(matches!(
            err,
            MdError::Validation(ValidationError::InvalidCharacters)
        ));
        assert!(!temp_dir.path().join("templates").exists());
    }

    #[test]
    fn test_list_fresh_directory() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TemplateService::new(&storage);

        assert_eq!(service.list_templates().unwrap(), vec!["default"]);
    }
}
