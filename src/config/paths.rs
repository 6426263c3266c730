//! Path management for the daycare ledger
//!
//! ## Path Resolution Order
//!
//! 1. `DAYCARE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/daycare` on Linux,
//!    `%APPDATA%\daycare` on Windows, `~/Library/Application Support/daycare`
//!    on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DaycareError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DAYCARE_DATA_DIR";

/// Manages all paths used by the application
#[derive(Debug, Clone)]
pub struct DaycarePaths {
    base_dir: PathBuf,
}

impl DaycarePaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DaycareError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DaycarePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the database and managed attachments
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("daycare.db")
    }

    /// Managed directory that expense attachments are copied into
    pub fn attachments_dir(&self) -> PathBuf {
        self.data_dir().join("expense_files")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base, data and attachment directories exist
    pub fn ensure_directories(&self) -> Result<(), DaycareError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DaycareError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DaycareError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.attachments_dir()).map_err(|e| {
            DaycareError::Io(format!("Failed to create attachment directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the ledger has been initialized (database file exists)
    pub fn is_initialized(&self) -> bool {
        self.database_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DaycareError> {
    ProjectDirs::from("", "", "daycare")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DaycareError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaycarePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.attachments_dir(),
            temp_dir.path().join("data").join("expense_files")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = DaycarePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaycarePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.attachments_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaycarePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.database_file(),
            temp_dir.path().join("data").join("daycare.db")
        );
    }
}
