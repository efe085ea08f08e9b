//! Path management for Cashbook
//!
//! ## Path Resolution Order
//!
//! 1. `CASHBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/cashbook` on Linux, `~/Library/Application Support/cashbook`
//!    on macOS, `%APPDATA%\cashbook` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashbookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CASHBOOK_DATA_DIR";

/// Manages all paths used by Cashbook
#[derive(Debug, Clone)]
pub struct CashbookPaths {
    base_dir: PathBuf,
}

impl CashbookPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashbookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "cashbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    CashbookError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exported backups
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Create the base, data and backup directories
    pub fn ensure_directories(&self) -> Result<(), CashbookError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.backup_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                CashbookError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if Cashbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
