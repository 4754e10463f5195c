//! Config file location for mdnote
//!
//! ## Resolution Order
//!
//! 1. An explicit path (`--config` / `MD_CONFIG`)
//! 2. `.md_config.yaml` in the current working directory
//! 3. `.md_config.yaml` in the user's home directory
//!
//! When nothing is found a default file is written to the working directory.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{FileOp, MdError, MdResult};

/// File name of the configuration file
pub const CONFIG_FILE_NAME: &str = ".md_config.yaml";

/// Directories searched for the configuration file
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Directory where a default config is created
    working_dir: PathBuf,
    /// User home directory, if it can be determined
    home_dir: Option<PathBuf>,
    /// Config file given on the command line
    explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Resolve paths from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(explicit: Option<PathBuf>) -> MdResult<Self> {
        let working_dir =
            std::env::current_dir().map_err(|e| MdError::file(FileOp::Read, ".", e))?;
        let home_dir = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

        Ok(Self {
            working_dir,
            home_dir,
            explicit,
        })
    }

    /// Create ConfigPaths with fixed directories (useful for testing)
    pub fn with_dirs(working_dir: PathBuf, home_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            home_dir,
            explicit: None,
        }
    }

    /// Use an explicit config file instead of searching
    pub fn with_explicit(mut self, path: PathBuf) -> Self {
        self.explicit = Some(path);
        self
    }

    /// Where a default config file is written when none exists
    pub fn default_config_file(&self) -> PathBuf {
        self.working_dir.join(CONFIG_FILE_NAME)
    }

    /// Find the config file to load, if any
    ///
    /// An explicit path is returned even when it does not exist, so the
    /// caller reports it instead of silently falling back.
    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return Some(explicit.clone());
        }

        let local = self.working_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        self.home_dir
            .as_ref()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nothing_found() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let paths = ConfigPaths::with_dirs(work.path().to_path_buf(), Some(home.path().to_path_buf()));

        assert!(paths.locate().is_none());
        assert_eq!(paths.default_config_file(), work.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_working_dir_wins_over_home() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        std::fs::write(work.path().join(CONFIG_FILE_NAME), "templates_dir: a\n").unwrap();
        std::fs::write(home.path().join(CONFIG_FILE_NAME), "templates_dir: b\n").unwrap();

        let paths = ConfigPaths::with_dirs(work.path().to_path_buf(), Some(home.path().to_path_buf()));
        assert_eq!(paths.locate(), Some(work.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_home_fallback() {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join(CONFIG_FILE_NAME), "templates_dir: b\n").unwrap();

        let paths = ConfigPaths::with_dirs(work.path().to_path_buf(), Some(home.path().to_path_buf()));
        assert_eq!(paths.locate(), Some(home.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_explicit_path() {
        let work = TempDir::new().unwrap();
        let custom = work.path().join("custom.yaml");

        let paths = ConfigPaths::with_dirs(work.path().to_path_buf(), None).with_explicit(custom.clone());
        assert_eq!(paths.locate(), Some(custom));
    }
}
