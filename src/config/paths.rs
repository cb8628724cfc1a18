//! Path management for workforce-table
//!
//! ## Path Resolution Order
//!
//! 1. `WFTABLE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/workforce-table` on
//!    Linux, `Application Support` on macOS, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TableError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WFTABLE_DATA_DIR";

/// Manages all paths used by workforce-table
#[derive(Debug, Clone)]
pub struct WorkforcePaths {
    base_dir: PathBuf,
}

impl WorkforcePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TableError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TableError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TableError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, TableError> {
    ProjectDirs::from("", "", "workforce-table")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TableError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WorkforcePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = WorkforcePaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WorkforcePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
