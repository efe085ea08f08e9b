//! Storage layer for Cashbook
//!
//! JSON file storage with atomic writes, plus the [`EntrySource`] seam the
//! reports read snapshots through.

pub mod entries;
pub mod file_io;
pub mod source;

pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use source::EntrySource;

use crate::config::paths::CashbookPaths;
use crate::error::CashbookError;

/// Main storage coordinator
pub struct Storage {
    paths: CashbookPaths,
    pub entries: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: CashbookPaths) -> Result<Self, CashbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &CashbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CashbookError> {
        self.entries.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CashbookError> {
        self.entries.save()
    }

    /// Check if storage has been initialized (settings file written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_then_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.save_all().unwrap();
        assert!(paths.entries_file().exists());

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.entries.count().unwrap(), 0);
    }
}
